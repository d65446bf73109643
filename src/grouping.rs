use std::collections::HashMap;

/// Records that know which month they belong to
pub trait MonthGrouped {
    /// Display name of the record's month, e.g. "April"
    fn month_name(&self) -> &str;
}

/// Groups records by month name.
///
/// Groups appear in the order their month is first seen and records keep
/// their input order within a group. Records are not sorted by date.
pub fn sort_by_month<T: MonthGrouped>(items: impl IntoIterator<Item = T>) -> Vec<Vec<T>> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Vec<T>> = Vec::new();

    for item in items {
        let position = match positions.get(item.month_name()).copied() {
            Some(position) => position,
            None => {
                positions.insert(item.month_name().to_owned(), groups.len());
                groups.push(Vec::new());
                groups.len() - 1
            }
        };
        groups[position].push(item);
    }

    groups
}
