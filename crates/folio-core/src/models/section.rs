use super::row::Row;

/// A maximal run of consecutive rows sharing the same section.
///
/// Groups are never merged: a section that reappears after a different one
/// opens a new group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionGroup<'a> {
    pub section: &'a str,
    pub rows: &'a [Row],
}

/// Split `rows` into section groups, preserving input order.
pub fn group_sections(rows: &[Row]) -> Vec<SectionGroup<'_>> {
    let mut groups = Vec::new();
    let mut current: Option<&str> = None;
    let mut start = 0;

    for (index, row) in rows.iter().enumerate() {
        if current != Some(row.section.as_str()) {
            if let Some(section) = current {
                groups.push(SectionGroup {
                    section,
                    rows: &rows[start..index],
                });
            }
            current = Some(row.section.as_str());
            start = index;
        }
    }

    if let Some(section) = current {
        groups.push(SectionGroup {
            section,
            rows: &rows[start..],
        });
    }

    groups
}
