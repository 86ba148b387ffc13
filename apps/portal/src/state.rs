use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{Member, Organization, Team};

pub type AppSignal = Signal<AppState>;

/// UI state of the team hierarchy page. The Organization itself is read-only
/// once loaded; everything else is driven by user interaction and discarded
/// with the page.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HierarchyState {
    pub organization: Option<Organization>,
    /// Practitioner ids whose team list is unfolded. Absent means collapsed.
    #[serde(default)]
    pub expanded: BTreeSet<u32>,
    pub selected_team_id: Option<u32>,
    #[serde(default)]
    pub search_term: String,
    /// Sum of declared team headcounts, fixed at load time. Stays stable no
    /// matter what the search filter shows.
    #[serde(default)]
    pub total_members: u32,
    #[serde(default)]
    pub is_loading: bool,
    pub error: Option<String>,
}

impl HierarchyState {
    /// Installs a freshly loaded Organization: precomputes the headcount
    /// total and unfolds the first practitioner. A zero-practitioner
    /// Organization is valid and simply renders empty.
    pub fn set_organization(&mut self, organization: Organization) {
        self.total_members = organization
            .practitioners
            .iter()
            .flat_map(|practitioner| practitioner.teams.iter())
            .map(|team| team.member_count)
            .sum();

        self.expanded.clear();
        if let Some(first) = organization.practitioners.first() {
            self.expanded.insert(first.id);
        }

        self.selected_team_id = None;
        self.organization = Some(organization);
        self.is_loading = false;
        self.error = None;
    }

    pub fn toggle_practitioner(&mut self, practitioner_id: u32) {
        if !self.expanded.insert(practitioner_id) {
            self.expanded.remove(&practitioner_id);
        }
    }

    pub fn is_expanded(&self, practitioner_id: u32) -> bool {
        self.expanded.contains(&practitioner_id)
    }

    /// Replaces the current selection unconditionally. Ids not reachable from
    /// the Organization are ignored so the selection can never dangle. The
    /// search term deliberately survives a selection change.
    pub fn select_team(&mut self, team_id: u32) {
        if self.team(team_id).is_some() {
            self.selected_team_id = Some(team_id);
        }
    }

    pub fn set_search_term(&mut self, text: impl Into<String>) {
        // Stored raw; matching lowercases both sides instead.
        self.search_term = text.into();
    }

    pub fn selected_team(&self) -> Option<&Team> {
        self.selected_team_id.and_then(|id| self.team(id))
    }

    pub fn team(&self, team_id: u32) -> Option<&Team> {
        self.organization.as_ref().and_then(|organization| {
            organization
                .practitioners
                .iter()
                .flat_map(|practitioner| practitioner.teams.iter())
                .find(|team| team.id == team_id)
        })
    }

    /// Roster of the selected team, narrowed by the live search text.
    /// `None` while nothing is selected; the panel renders a neutral
    /// placeholder in that case rather than filtering.
    pub fn filtered_members(&self) -> Option<Vec<Member>> {
        let team = self.selected_team()?;
        if self.search_term.is_empty() {
            return Some(team.members.clone());
        }

        let needle = self.search_term.to_lowercase();
        Some(
            team.members
                .iter()
                .filter(|member| {
                    member.name.to_lowercase().contains(&needle)
                        || member.goal.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect(),
        )
    }
}

/// Outcome of the most recent user-triggered operation, rendered as a toast.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct OperationState {
    pub last_message: Option<String>,
    pub error: Option<String>,
    pub context: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    pub hierarchy: HierarchyState,
    pub operation: OperationState,
}

#[derive(Clone, Copy)]
pub struct AppActions {
    state: AppSignal,
}

impl AppActions {
    // Methods stay callable through a shared reference: the signal is Copy,
    // so each one lifts it into a mutable local before writing.
    pub fn set_organization(&self, organization: Organization) {
        let mut state = self.state;
        state.write().hierarchy.set_organization(organization);
    }

    pub fn set_hierarchy_loading(&self, loading: bool) {
        let mut state = self.state;
        state.write().hierarchy.is_loading = loading;
    }

    pub fn set_hierarchy_error(&self, message: Option<String>) {
        let mut signal = self.state;
        let mut state = signal.write();
        state.hierarchy.error = message;
        if state.hierarchy.error.is_some() {
            state.hierarchy.is_loading = false;
        }
    }

    pub fn toggle_practitioner(&self, practitioner_id: u32) {
        let mut state = self.state;
        state.write().hierarchy.toggle_practitioner(practitioner_id);
    }

    pub fn select_team(&self, team_id: u32) {
        let mut state = self.state;
        state.write().hierarchy.select_team(team_id);
    }

    pub fn set_search_term(&self, text: String) {
        let mut state = self.state;
        state.write().hierarchy.set_search_term(text);
    }

    pub fn set_operation_success(&self, context: impl Into<String>, message: String) {
        let mut signal = self.state;
        let mut state = signal.write();
        state.operation.last_message = Some(message);
        state.operation.error = None;
        state.operation.context = Some(context.into());
    }

    pub fn set_operation_error(&self, context: impl Into<String>, message: String) {
        let mut signal = self.state;
        let mut state = signal.write();
        state.operation.error = Some(message);
        state.operation.last_message = None;
        state.operation.context = Some(context.into());
    }

    pub fn clear_operation_status(&self) {
        let mut state = self.state;
        state.write().operation = OperationState::default();
    }
}

pub fn use_app_state() -> AppSignal {
    use_context::<AppSignal>()
}

pub fn use_app_actions() -> AppActions {
    AppActions {
        state: use_app_state(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Member, Organization, Practitioner, Team};

    fn make_member(id: u32, name: &str, goal: &str) -> Member {
        Member {
            id,
            name: name.to_string(),
            age: 30,
            goal: goal.to_string(),
            progress: String::new(),
        }
    }

    fn make_org() -> Organization {
        Organization {
            company_name: "FitLife Wellness".to_string(),
            practitioners: vec![
                Practitioner {
                    id: 10,
                    name: "Dr. Sarah Chen".to_string(),
                    teams: vec![
                        Team {
                            id: 101,
                            name: "Morning Warriors".to_string(),
                            member_count: 12,
                            members: vec![
                                make_member(1, "Emma Wilson", "Lose 10kg"),
                                make_member(2, "James Park", "Tone muscles"),
                            ],
                        },
                        Team {
                            id: 102,
                            name: "Keto Crew".to_string(),
                            member_count: 8,
                            members: vec![make_member(3, "Lucy Adams", "Lower cholesterol")],
                        },
                    ],
                },
                Practitioner {
                    id: 20,
                    name: "Marco Ruiz".to_string(),
                    teams: vec![Team {
                        id: 201,
                        name: "Strength Squad".to_string(),
                        member_count: 5,
                        members: vec![make_member(4, "Noah Lee", "Build muscle")],
                    }],
                },
                Practitioner {
                    id: 30,
                    name: "Aisha Khan".to_string(),
                    teams: Vec::new(),
                },
            ],
        }
    }

    fn loaded_state() -> HierarchyState {
        let mut state = HierarchyState::default();
        state.set_organization(make_org());
        state
    }

    #[test]
    fn total_members_sums_declared_counts_not_roster_lengths() {
        let state = loaded_state();
        // 12 + 8 + 5, even though only four members are actually listed.
        assert_eq!(state.total_members, 25);
    }

    #[test]
    fn only_first_practitioner_expanded_after_load() {
        let state = loaded_state();
        assert!(state.is_expanded(10));
        assert!(!state.is_expanded(20));
        assert!(!state.is_expanded(30));
    }

    #[test]
    fn toggle_twice_restores_prior_state() {
        let mut state = loaded_state();
        let before = state.expanded.clone();
        state.toggle_practitioner(20);
        assert!(state.is_expanded(20));
        state.toggle_practitioner(20);
        assert_eq!(state.expanded, before);
    }

    #[test]
    fn toggling_one_practitioner_leaves_others_untouched() {
        let mut state = loaded_state();
        state.toggle_practitioner(20);
        assert!(state.is_expanded(10));
        assert!(state.is_expanded(20));
        assert!(!state.is_expanded(30));
    }

    #[test]
    fn empty_search_returns_full_roster_in_order() {
        let mut state = loaded_state();
        state.select_team(101);
        let members = state.filtered_members().expect("selection");
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].name, "Emma Wilson");
        assert_eq!(members[1].name, "James Park");
    }

    #[test]
    fn search_matches_goal_case_insensitively() {
        let mut state = loaded_state();
        state.select_team(101);
        state.set_search_term("lose");
        let members = state.filtered_members().expect("selection");
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].goal, "Lose 10kg");
    }

    #[test]
    fn search_matches_name_as_well_as_goal() {
        let mut state = loaded_state();
        state.select_team(101);
        state.set_search_term("PARK");
        let members = state.filtered_members().expect("selection");
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].name, "James Park");
    }

    #[test]
    fn search_term_survives_team_switch() {
        let mut state = loaded_state();
        state.select_team(101);
        state.set_search_term("lose");
        state.select_team(102);
        // The stale filter keeps applying against the new roster.
        assert_eq!(state.search_term, "lose");
        let members = state.filtered_members().expect("selection");
        assert!(members.is_empty());
    }

    #[test]
    fn no_selection_yields_no_derivation() {
        let state = loaded_state();
        assert!(state.filtered_members().is_none());
    }

    #[test]
    fn unreachable_team_id_is_ignored() {
        let mut state = loaded_state();
        state.select_team(101);
        state.select_team(999);
        assert_eq!(state.selected_team_id, Some(101));
    }

    #[test]
    fn empty_organization_is_valid() {
        let mut state = HierarchyState::default();
        state.set_organization(Organization {
            company_name: "Ghost Gym".to_string(),
            practitioners: Vec::new(),
        });
        assert_eq!(state.total_members, 0);
        assert!(state.expanded.is_empty());
        assert!(state.error.is_none());
        assert!(!state.is_loading);
    }

    #[test]
    fn reload_resets_selection_and_expansion() {
        let mut state = loaded_state();
        state.select_team(201);
        state.toggle_practitioner(20);
        state.set_organization(make_org());
        assert_eq!(state.selected_team_id, None);
        assert!(state.is_expanded(10));
        assert!(!state.is_expanded(20));
    }

    #[test]
    fn actions_mutate_through_shared_reference() {
        // AppActions is copied into event closures all over the UI; its
        // mutating methods must keep taking `&self`, with the signal lifted
        // into a mutable local internally.
        fn takes_id(_: fn(&AppActions, u32)) {}
        fn takes_flag(_: fn(&AppActions, bool)) {}
        takes_id(AppActions::toggle_practitioner);
        takes_id(AppActions::select_team);
        takes_flag(AppActions::set_hierarchy_loading);
    }

    #[test]
    fn search_term_is_stored_raw() {
        let mut state = loaded_state();
        state.set_search_term("  Lose ");
        assert_eq!(state.search_term, "  Lose ");
    }
}
