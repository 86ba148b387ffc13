use crate::models::{Member, Organization, Practitioner, Team};

/// Sample coaching hierarchy so the portal is browsable without a backend.
/// Declared headcounts are authoritative; some rosters below are truncated
/// and intentionally shorter than the count they declare.
pub fn sample_organization() -> Organization {
    Organization {
        company_name: "FitLife Wellness".to_string(),
        practitioners: vec![
            Practitioner {
                id: 1,
                name: "Dr. Sarah Chen".to_string(),
                teams: vec![
                    Team {
                        id: 11,
                        name: "Morning Warriors".to_string(),
                        member_count: 12,
                        // truncated roster, headcount stays 12
                        members: vec![
                            member(111, "Emma Wilson", 34, "Lose 10kg", "Down 4kg in six weeks"),
                            member(112, "James Park", 28, "Tone muscles", "Added two sessions/week"),
                            member(113, "Olivia Brant", 41, "Improve stamina", "5k under 30 minutes"),
                            member(114, "Daniel Osei", 37, "Lower blood pressure", "Holding steady"),
                        ],
                    },
                    Team {
                        id: 12,
                        name: "Keto Crew".to_string(),
                        member_count: 8,
                        members: vec![
                            member(121, "Lucy Adams", 45, "Lower cholesterol", "LDL trending down"),
                            member(122, "Peter Nagy", 52, "Lose 15kg", "Plateaued, adjusting macros"),
                            member(123, "Mia Torres", 29, "Keep ketosis streak", "Day 41 and counting"),
                        ],
                    },
                ],
            },
            Practitioner {
                id: 2,
                name: "Marco Ruiz".to_string(),
                teams: vec![
                    Team {
                        id: 21,
                        name: "Strength Squad".to_string(),
                        member_count: 10,
                        // truncated roster, headcount stays 10
                        members: vec![
                            member(211, "Noah Lee", 26, "Build muscle", "Bench up 10kg"),
                            member(212, "Ava Moreau", 31, "Deadlift bodyweight", "95% there"),
                        ],
                    },
                    Team {
                        id: 22,
                        name: "Weekend Hikers".to_string(),
                        member_count: 6,
                        members: vec![
                            member(221, "Ethan Hall", 48, "Stay active", "Two hikes a month"),
                            member(222, "Grace Lin", 39, "Lose 5kg", "Halfway"),
                            member(223, "Tom Becker", 55, "Recover knee strength", "Cleared for inclines"),
                            member(224, "Ines Farah", 33, "Improve endurance", "Longest hike yet: 18km"),
                            member(225, "Ben Cole", 27, "Keep the habit", "No missed weekends"),
                            member(226, "Sofia Marin", 36, "Train for trek", "Pack weight up to 9kg"),
                        ],
                    },
                ],
            },
            Practitioner {
                id: 3,
                name: "Aisha Khan".to_string(),
                teams: vec![Team {
                    id: 31,
                    name: "Postnatal Fit".to_string(),
                    member_count: 7,
                    // truncated roster, headcount stays 7
                    members: vec![
                        member(311, "Hannah Voss", 32, "Rebuild core strength", "Week 9 of program"),
                        member(312, "Priya Shah", 30, "Lose baby weight", "3kg to target"),
                        member(313, "Clara Jensen", 35, "Ease back pain", "Pain-free mornings"),
                    ],
                }],
            },
        ],
    }
}

fn member(id: u32, name: &str, age: u32, goal: &str, progress: &str) -> Member {
    Member {
        id,
        name: name.to_string(),
        age,
        goal: goal.to_string(),
        progress: progress.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn practitioner_and_team_ids_are_unique() {
        let org = sample_organization();
        let mut practitioner_ids = BTreeSet::new();
        let mut team_ids = BTreeSet::new();
        for practitioner in &org.practitioners {
            assert!(practitioner_ids.insert(practitioner.id));
            for team in &practitioner.teams {
                assert!(team_ids.insert(team.id));
            }
        }
    }

    #[test]
    fn some_rosters_are_shorter_than_declared_headcount() {
        let org = sample_organization();
        let truncated = org
            .practitioners
            .iter()
            .flat_map(|p| p.teams.iter())
            .filter(|team| (team.members.len() as u32) < team.member_count)
            .count();
        assert!(truncated >= 1, "fixture must keep a truncated roster");
    }
}
