use dioxus::prelude::*;
use dioxus_router::prelude::Link;

use crate::ui::use_document_title;
use crate::Route;

/// Landing page for expired or already-used invitation links. Static notice
/// with two fixed ways out.
#[component]
pub fn InvalidLinkPage() -> Element {
    use_document_title("Invalid invitation · FitLink");

    rsx! {
        section { class: "mx-auto max-w-md space-y-4 pt-12 text-center",
            div { class: "text-4xl", "⚠️" }
            h2 { class: "text-lg font-semibold text-slate-900",
                "This invitation link is no longer valid"
            }
            p { class: "text-xs text-slate-500",
                "The link may have expired or was already used. Ask your coach to send a fresh one, or continue on your own below."
            }
            div { class: "flex justify-center gap-3",
                Link {
                    to: Route::PlansPage {},
                    class: "rounded bg-slate-900 px-4 py-2 text-xs font-semibold text-white hover:bg-slate-700",
                    "Browse plans"
                }
                a {
                    class: "rounded border border-slate-300 px-4 py-2 text-xs text-slate-700 hover:border-slate-500",
                    href: "mailto:support@fitlink.app",
                    "Contact support"
                }
            }
        }
    }
}
