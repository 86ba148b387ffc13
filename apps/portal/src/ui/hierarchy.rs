use dioxus::prelude::*;

use crate::hooks::organization::use_organization;
use crate::models::{Practitioner, Team};
use crate::state::{use_app_actions, use_app_state, HierarchyState};
use crate::ui::use_document_title;

/// Collapsible Practitioner → Team tree on the left, roster of the selected
/// team with a live search filter on the right.
#[component]
pub fn TeamsPage() -> Element {
    use_document_title("Your teams · FitLink");
    use_organization();

    let state = use_app_state();
    let hierarchy = state.read().hierarchy.clone();

    let body = if hierarchy.is_loading {
        rsx! { p { class: "text-xs text-slate-500", "Loading your teams..." } }
    } else if let Some(ref err) = hierarchy.error {
        rsx! {
            div { class: "rounded-lg border border-red-200 bg-red-50 p-4 text-xs text-red-700",
                "Teams could not be loaded: {err}"
            }
        }
    } else if let Some(ref organization) = hierarchy.organization {
        if organization.practitioners.is_empty() {
            rsx! {
                p { class: "text-xs text-slate-500 italic",
                    "No coaches or teams yet for {organization.company_name}."
                }
            }
        } else {
            rsx! {
                div { class: "grid gap-4 lg:grid-cols-[320px_1fr]",
                    div { class: "space-y-2",
                        for practitioner in organization.practitioners.iter() {
                            PractitionerNode {
                                key: "{practitioner.id}",
                                practitioner: practitioner.clone(),
                                expanded: hierarchy.is_expanded(practitioner.id),
                                selected_team_id: hierarchy.selected_team_id,
                            }
                        }
                    }
                    TeamDetailPanel { hierarchy: hierarchy.clone() }
                }
            }
        }
    } else {
        rsx! { p { class: "text-xs text-slate-500", "Waiting for data..." } }
    };

    let subtitle = hierarchy
        .organization
        .as_ref()
        .map(|organization| {
            format!(
                "{} · {} members across all teams",
                organization.company_name, hierarchy.total_members
            )
        })
        .unwrap_or_default();

    rsx! {
        section { class: "space-y-3",
            header { class: "flex flex-col gap-1",
                h2 { class: "text-lg font-semibold text-slate-900", "Teams & members" }
                if !subtitle.is_empty() {
                    p { class: "text-xs text-slate-500", "{subtitle}" }
                }
            }
            {body}
        }
    }
}

#[component]
fn PractitionerNode(
    practitioner: Practitioner,
    expanded: bool,
    selected_team_id: Option<u32>,
) -> Element {
    let actions = use_app_actions();
    let practitioner_id = practitioner.id;
    let marker = if expanded { "▾" } else { "▸" };

    rsx! {
        div { class: "rounded-lg border border-slate-200 bg-white shadow-sm",
            button {
                class: "flex w-full items-center justify-between px-4 py-3 text-left text-sm font-semibold text-slate-800 hover:bg-slate-50",
                onclick: move |_| actions.toggle_practitioner(practitioner_id),
                span { "{practitioner.name}" }
                span { class: "text-xs text-slate-400", "{marker}" }
            }
            if expanded {
                div { class: "space-y-1 border-t border-slate-100 p-2",
                    if practitioner.teams.is_empty() {
                        p { class: "px-2 py-1 text-xs text-slate-500 italic", "No teams assigned" }
                    }
                    for team in practitioner.teams.iter() {
                        TeamRow {
                            key: "{team.id}",
                            team: team.clone(),
                            active: selected_team_id == Some(team.id),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TeamRow(team: Team, active: bool) -> Element {
    let actions = use_app_actions();
    let team_id = team.id;
    let row_class = if active {
        "flex w-full items-center justify-between rounded bg-slate-900 px-3 py-2 text-left text-xs font-semibold text-white"
    } else {
        "flex w-full items-center justify-between rounded px-3 py-2 text-left text-xs text-slate-700 hover:bg-slate-100"
    };

    rsx! {
        button {
            class: row_class,
            onclick: move |_| actions.select_team(team_id),
            span { "{team.name}" }
            span { class: "text-[11px] opacity-70", "{team.member_count} members" }
        }
    }
}

#[component]
fn TeamDetailPanel(hierarchy: HierarchyState) -> Element {
    let actions = use_app_actions();

    let Some(team) = hierarchy.selected_team().cloned() else {
        return rsx! {
            div { class: "flex items-center justify-center rounded-lg border border-dashed border-slate-300 p-8",
                p { class: "text-xs text-slate-500", "Select a team to see its members." }
            }
        };
    };

    let members = hierarchy.filtered_members().unwrap_or_default();
    let search = hierarchy.search_term.clone();

    rsx! {
        div { class: "space-y-3 rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
            header { class: "flex items-center justify-between",
                h3 { class: "text-sm font-semibold text-slate-800", "{team.name}" }
                span { class: "text-[11px] text-slate-500", "{team.member_count} members" }
            }
            input {
                class: "w-full rounded border border-slate-300 px-3 py-2 text-xs focus:border-slate-500 focus:outline-none",
                r#type: "search",
                placeholder: "Search by name or goal",
                value: "{search}",
                oninput: move |evt| actions.set_search_term(evt.value()),
            }
            if members.is_empty() && !search.is_empty() {
                p { class: "text-xs text-slate-500 italic", "No members match \"{search}\"." }
            } else if members.is_empty() {
                p { class: "text-xs text-slate-500 italic", "This roster is empty." }
            } else {
                ul { class: "space-y-2",
                    for member in members.iter() {
                        li { key: "{member.id}",
                            class: "rounded border border-slate-100 p-3 text-xs text-slate-600",
                            div { class: "flex items-center justify-between",
                                span { class: "font-semibold text-slate-800", "{member.name}" }
                                span { class: "text-[11px] text-slate-400", "{member.age} yrs" }
                            }
                            p { "Goal: {member.goal}" }
                            if !member.progress.is_empty() {
                                p { class: "text-[11px] text-slate-500", "{member.progress}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
