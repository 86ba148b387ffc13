use dioxus::prelude::*;
use dioxus_router::prelude::navigator;
use gloo_timers::future::TimeoutFuture;

use crate::fixtures::plans::plan_catalog;
use crate::models::SubscriptionPlan;
use crate::state::use_app_actions;
use crate::ui::use_document_title;
use crate::Route;

/// Delay between the confirmation toast and the redirect to sign-up. The
/// task is owned by the component scope, so tearing the page down first
/// cancels the pending navigation.
const REDIRECT_DELAY_MS: u32 = 1_000;

#[component]
pub fn PlansPage() -> Element {
    use_document_title("Choose your plan · FitLink");

    let actions = use_app_actions();
    let nav = navigator();
    let mut hovered = use_signal(|| None::<String>);

    let mut cards: Vec<Element> = Vec::new();
    for plan in plan_catalog() {
        let is_hovered = hovered() == Some(plan.id.clone());
        let hover_id = plan.id.clone();
        let chosen = plan.clone();
        cards.push(rsx! {
            PlanCard {
                key: "{plan.id}",
                plan: plan.clone(),
                hovered: is_hovered,
                on_hover: move |inside: bool| {
                    hovered.set(inside.then(|| hover_id.clone()));
                },
                on_select: move |_| {
                    let plan = chosen.clone();
                    actions.set_operation_success(
                        "Plan selected",
                        format!("{} it is! Taking you to sign-up...", plan.name),
                    );
                    spawn(async move {
                        TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                        nav.push(Route::RegisterPage {
                            plan: plan.id.clone(),
                        });
                    });
                },
            }
        });
    }

    rsx! {
        section { class: "space-y-4",
            header { class: "flex flex-col gap-1",
                h2 { class: "text-lg font-semibold text-slate-900", "Choose your plan" }
                p { class: "text-xs text-slate-500",
                    "Pick a tier to get matched with a dietitian and a team."
                }
            }
            div { class: "grid gap-4 md:grid-cols-2 xl:grid-cols-4",
                for card in cards {
                    {card}
                }
            }
        }
    }
}

#[component]
fn PlanCard(
    plan: SubscriptionPlan,
    hovered: bool,
    on_hover: EventHandler<bool>,
    on_select: EventHandler<MouseEvent>,
) -> Element {
    let price = plan.price_label();
    let period = plan.period.label();
    let card_class = if plan.highlighted {
        "flex flex-col gap-3 rounded-lg border-2 border-slate-900 bg-white p-4 shadow-md"
    } else if hovered {
        "flex flex-col gap-3 rounded-lg border border-slate-400 bg-white p-4 shadow-md"
    } else {
        "flex flex-col gap-3 rounded-lg border border-slate-200 bg-white p-4 shadow-sm"
    };

    rsx! {
        div {
            class: card_class,
            onmouseenter: move |_| on_hover.call(true),
            onmouseleave: move |_| on_hover.call(false),
            header { class: "flex items-center justify-between",
                h3 { class: "text-sm font-semibold text-slate-900", "{plan.name}" }
                if plan.highlighted {
                    span { class: "rounded bg-slate-900 px-2 py-0.5 text-[10px] font-semibold text-white",
                        "Most popular"
                    }
                }
            }
            p { class: "text-2xl font-bold text-slate-900",
                "{price}"
                span { class: "ml-1 text-xs font-normal text-slate-500", "{period}" }
            }
            ul { class: "flex-1 space-y-1 text-xs text-slate-600",
                for feature in plan.features.iter() {
                    li { "• {feature}" }
                }
            }
            button {
                class: "rounded bg-slate-900 px-4 py-2 text-xs font-semibold text-white hover:bg-slate-700",
                onclick: move |evt| on_select.call(evt),
                "Select {plan.name}"
            }
        }
    }
}
