//! Content documents fetched by the page.

use serde::{Deserialize, Deserializer};

mod reading_list;
mod schedule;
mod team;

pub use reading_list::{Paper, ReadingListDocument};
pub use schedule::{
    Day, DaySession, OutlineSession, ScheduleBody, ScheduleDocument, Segment, TutorialInfo,
};
pub use team::{Affiliation, AffiliationId, Organizer, TeamDocument};

/// Read an explicit JSON `null` the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
