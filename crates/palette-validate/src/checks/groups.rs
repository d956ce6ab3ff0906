//! Group consistency: each `groupId` should cluster several colors with
//! exactly one canonical `referenceInGroup` member.

use std::collections::BTreeMap;

use palette_model::{Color, Palette};

use crate::issue::Issue;

pub fn check(palette: &Palette) -> Vec<Issue> {
    let mut issues = Vec::new();

    let mut groups: BTreeMap<&str, Vec<&Color>> = BTreeMap::new();
    for color in &palette.colors {
        match color.group_id.as_deref() {
            Some(group) => groups.entry(group).or_default().push(color),
            None => {
                if color.reference_in_group {
                    issues.push(Issue::ReferenceOutsideGroup {
                        color: color.label().to_string(),
                    });
                }
            }
        }
    }

    for (group, members) in groups {
        if members.len() == 1 {
            issues.push(Issue::DanglingGroup {
                group: group.to_string(),
                color: members[0].label().to_string(),
            });
            continue;
        }
        let references = members
            .iter()
            .filter(|color| color.reference_in_group)
            .count();
        if references > 1 {
            issues.push(Issue::MultipleGroupReferences {
                group: group.to_string(),
                count: references as u64,
            });
        } else if references == 0 {
            issues.push(Issue::GroupMissingReference {
                group: group.to_string(),
            });
        }
    }

    issues
}
