//! Built-in destination catalog.
//!
//! Trips created from a catalog entry keep its id in
//! [`Trip::place_id`](crate::models::Trip::place_id); the catalog itself is
//! read-only.

use crate::models::{Expenses, Place};

static PLACES: [Place; 5] = [
    Place {
        id: "kerala-backwaters",
        name: "Kerala Backwaters",
        country: "Kerala, India",
        location: "Alleppey & Kumarakom",
        image: "https://images.unsplash.com/photo-1602216056096-3b40cc0c9944?w=800&h=600&fit=crop&q=80",
        rating: 4.9,
        description: "Experience the tranquility of Kerala's famous network of interconnected canals, rivers, lakes, and inlets. A houseboat cruise here is a quintessential Indian experience, offering a glimpse into the gentle rhythm of village life.",
        best_season: "September to March",
        budget: "₹6,800 - ₹12,750 per day",
        lat: Some(9.4981),
        lng: Some(76.3388),
        expenses: Expenses {
            accommodation: "₹4,250 (Houseboat/Homestay)",
            food: "₹1,275 (Local cuisine)",
            transport: "₹850 (Ferry/Auto)",
            activities: "₹2,550 (Ayurveda/Canoeing)",
        },
    },
    Place {
        id: "manali",
        name: "Manali",
        country: "Himachal Pradesh, India",
        location: "Kullu Valley",
        image: "https://images.unsplash.com/photo-1626621341517-bbf3d9990a23?w=800&h=600&fit=crop&q=80",
        rating: 4.8,
        description: "A high-altitude Himalayan resort town known for its backpacking culture, stunning views, and adventure sports. It serves as a gateway to skiing in the Solang Valley and trekking in Parvati Valley.",
        best_season: "October to June",
        budget: "₹3,400 - ₹8,500 per day",
        lat: Some(32.2432),
        lng: Some(77.1892),
        expenses: Expenses {
            accommodation: "₹2,550 (Guest house/Hotel)",
            food: "₹1,275 (Cafe hopping)",
            transport: "₹850 (Local buses/Bikes)",
            activities: "₹1,700 (Trekking/Adventure)",
        },
    },
    Place {
        id: "lakshadweep",
        name: "Lakshadweep",
        country: "Lakshadweep, India",
        location: "Arabian Sea",
        image: "https://images.unsplash.com/photo-1544551763-46a013bb70d5?w=800&h=600&fit=crop&q=80",
        rating: 4.9,
        description: "A tropical archipelago of 36 atolls and coral reefs in the Laccadive Sea, known for its sun-kissed beaches and lush green landscape. Only a few islands are open to tourists, ensuring a pristine environment.",
        best_season: "October to mid-May",
        budget: "₹8,500 - ₹17,000 per day",
        lat: Some(10.5667),
        lng: Some(72.6417),
        expenses: Expenses {
            accommodation: "₹6,800 (Island resorts)",
            food: "₹2,125 (Seafood)",
            transport: "₹1,700 (Inter-island boats)",
            activities: "₹3,400 (Scuba/Snorkeling)",
        },
    },
    Place {
        id: "jaipur",
        name: "Jaipur",
        country: "Rajasthan, India",
        location: "Pink City",
        image: "https://images.unsplash.com/photo-1599661046289-e31897846e41?w=800&h=600&fit=crop&q=80",
        rating: 4.7,
        description: "The capital of India's Rajasthan state, Jaipur evokes the royal family that once ruled the region and that, in 1727, founded what is now called the Old City, or 'Pink City' for its trademark building color.",
        best_season: "October to March",
        budget: "₹4,250 - ₹10,200 per day",
        lat: Some(26.9124),
        lng: Some(75.7873),
        expenses: Expenses {
            accommodation: "₹3,400 (Heritage Haveli)",
            food: "₹1,700 (Rajasthani Thali)",
            transport: "₹850 (Rickshaw/Taxi)",
            activities: "₹1,275 (Fort entry fees)",
        },
    },
    Place {
        id: "goa-beaches",
        name: "Goa Beaches",
        country: "Goa, India",
        location: "Konkan Coast",
        image: "https://images.unsplash.com/photo-1512343879784-a960bf40e7f2?w=800&h=600&fit=crop&q=80",
        rating: 4.8,
        description: "Famous for its sandy shores, nightlife, and Portuguese heritage. Whether you prefer the bustling vibe of North Goa or the serene beaches of South Goa, there's something for every traveler.",
        best_season: "November to February",
        budget: "₹5,100 - ₹12,750 per day",
        lat: Some(15.2993),
        lng: Some(74.1240),
        expenses: Expenses {
            accommodation: "₹4,250 (Beach hut/Resort)",
            food: "₹2,125 (Seafood/Fenny)",
            transport: "₹850 (Scooter rental)",
            activities: "₹1,700 (Water sports)",
        },
    },
];

/// Every catalog entry, in catalog order.
pub fn places() -> &'static [Place] {
    &PLACES
}

/// Looks a place up by id.
pub fn find_place(id: &str) -> Option<&'static Place> {
    PLACES.iter().find(|place| place.id == id)
}
