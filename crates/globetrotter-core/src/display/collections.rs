//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::{Place, Trip, TripStatus};

/// Newtype wrapper for displaying a list of trips.
///
/// # Examples
///
/// ```rust
/// use globetrotter_core::{display::Trips, store::sample_trips};
///
/// let trips = Trips(sample_trips());
/// assert_eq!(trips.len(), 5);
/// assert!(trips.to_string().contains("Rajasthan Heritage Tour"));
/// ```
pub struct Trips(pub Vec<Trip>);

impl Trips {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of trips in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the trip at the given index.
    pub fn get(&self, index: usize) -> Option<&Trip> {
        self.0.get(index)
    }

    /// Get an iterator over the trips.
    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.0.iter()
    }
}

impl Index<usize> for Trips {
    type Output = Trip;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Trips {
    type Item = Trip;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trips {
    type Item = &'a Trip;
    type IntoIter = std::slice::Iter<'a, Trip>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Trips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No trips found.")
        } else {
            for trip in &self.0 {
                write!(f, "{trip}")?;
            }
            Ok(())
        }
    }
}

/// Trips split into the Ongoing, Upcoming and Completed sections of the
/// "My Trips" view.
///
/// Each section keeps the collection's newest-first order. A grouping can
/// be narrowed to one status with [`TripsByStatus::only`], in which case
/// only that section is rendered.
pub struct TripsByStatus {
    sections: Vec<(TripStatus, Vec<Trip>)>,
}

impl TripsByStatus {
    /// Groups `trips` by the status `status_of` assigns each one.
    pub fn group<F>(trips: Vec<Trip>, status_of: F) -> Self
    where
        F: Fn(&Trip) -> TripStatus,
    {
        let mut sections: Vec<(TripStatus, Vec<Trip>)> = TripStatus::ALL
            .iter()
            .map(|status| (*status, Vec::new()))
            .collect();

        for trip in trips {
            let status = status_of(&trip);
            if let Some((_, section)) = sections.iter_mut().find(|(s, _)| *s == status) {
                section.push(trip);
            }
        }

        Self { sections }
    }

    /// Keeps only the section for `status`.
    pub fn only(mut self, status: TripStatus) -> Self {
        self.sections.retain(|(s, _)| *s == status);
        self
    }

    /// Trips in the section for `status`; empty if that section was dropped.
    pub fn get(&self, status: TripStatus) -> &[Trip] {
        self.sections
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, trips)| trips.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of trips across the kept sections.
    pub fn len(&self) -> usize {
        self.sections.iter().map(|(_, trips)| trips.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the kept sections in display order.
    pub fn iter(&self) -> impl Iterator<Item = (TripStatus, &[Trip])> {
        self.sections
            .iter()
            .map(|(status, trips)| (*status, trips.as_slice()))
    }
}

impl fmt::Display for TripsByStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (status, trips) in self.iter() {
            writeln!(f, "## {}", status.heading())?;
            writeln!(f)?;
            if trips.is_empty() {
                writeln!(f, "No {status} trips.")?;
                writeln!(f)?;
            } else {
                for trip in trips {
                    write!(f, "{trip}")?;
                }
            }
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying catalog places as a compact list.
pub struct Places(pub Vec<&'static Place>);

impl Places {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Places {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No places found.");
        }
        for place in &self.0 {
            writeln!(
                f,
                "- **{}** (`{}`): {}, {}. Rated {:.1}, {}",
                place.name, place.id, place.location, place.country, place.rating, place.budget
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::places, store::sample_trips};

    #[test]
    fn test_group_by_stored_status() {
        let grouped = TripsByStatus::group(sample_trips(), |t| t.status);
        assert_eq!(grouped.len(), 5);
        assert_eq!(grouped.get(TripStatus::Ongoing).len(), 1);
        assert_eq!(grouped.get(TripStatus::Upcoming).len(), 2);
        assert_eq!(grouped.get(TripStatus::Completed).len(), 2);

        let order: Vec<_> = grouped.iter().map(|(s, _)| s).collect();
        assert_eq!(order, TripStatus::ALL.to_vec());
    }

    #[test]
    fn test_group_keeps_collection_order() {
        let grouped = TripsByStatus::group(sample_trips(), |t| t.status);
        let upcoming: Vec<_> = grouped
            .get(TripStatus::Upcoming)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(upcoming, vec!["trip-2", "trip-3"]);
    }

    #[test]
    fn test_only_narrows_sections() {
        let grouped = TripsByStatus::group(sample_trips(), |t| t.status).only(TripStatus::Completed);
        assert_eq!(grouped.len(), 2);
        assert!(grouped.get(TripStatus::Ongoing).is_empty());

        let output = grouped.to_string();
        assert!(output.contains("## Completed Trips"));
        assert!(!output.contains("## Upcoming Trips"));
    }

    #[test]
    fn test_empty_section_message() {
        let grouped = TripsByStatus::group(Vec::new(), |t| t.status);
        assert!(grouped.is_empty());
        let output = grouped.to_string();
        assert!(output.contains("## Ongoing Trips\n\nNo ongoing trips."));
        assert!(output.contains("No completed trips."));
    }

    #[test]
    fn test_trips_display_empty() {
        assert_eq!(Trips(vec![]).to_string(), "No trips found.\n");
    }

    #[test]
    fn test_places_display() {
        let output = Places(places().iter().collect()).to_string();
        assert_eq!(output.lines().count(), 5);
        assert!(output.contains("(`goa-beaches`)"));
    }
}
