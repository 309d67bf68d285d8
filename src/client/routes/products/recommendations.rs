use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaWandMagicSparkles;
use dioxus_free_icons::Icon;

use crate::{client::components::Badge, model::product::InfluencerMatch};

/// SmartMatch results, best match first.
#[component]
pub fn Recommendations(matches: Vec<InfluencerMatch>, loading: bool) -> Element {
    if loading {
        return rsx!(
            div { class: "flex items-center gap-2 py-4",
                span { class: "loading loading-dots loading-md" }
                "Finding the best creators..."
            }
        );
    }
    if matches.is_empty() {
        return rsx!();
    }

    rsx!(
        div { class: "card bg-base-200 shadow-sm mt-4",
            div { class: "card-body gap-3",
                h3 { class: "card-title flex gap-2",
                    Icon { width: 18, height: 18, icon: FaWandMagicSparkles }
                    "SmartMatch Recommendations"
                }
                ul { class: "flex flex-col gap-2",
                    for candidate in matches {
                        {
                            let profile = candidate.influencer;
                            let score = format!("{:.0}% match", candidate.match_score);
                            let initial = profile.name.chars().next().unwrap_or('?');
                            let reach = format!(
                                "@{} · {} followers · {} engagement",
                                profile.username, profile.followers, profile.engagement
                            );
                            rsx!(
                                li {
                                    key: "{profile.id}",
                                    class: "flex items-center justify-between gap-4",
                                    class: "p-3 rounded-lg bg-base-100",
                                    div { class: "flex items-center gap-3",
                                        div { class: "avatar avatar-placeholder",
                                            div {
                                                class: "w-10 rounded-full",
                                                class: "bg-primary text-primary-content",
                                                span { "{initial}" }
                                            }
                                        }
                                        div {
                                            p { class: "font-medium", "{profile.name}" }
                                            p { class: "text-xs text-base-content/60",
                                                "{reach}"
                                            }
                                        }
                                    }
                                    div { class: "flex items-center gap-2",
                                        Badge { small: true, "{profile.niche}" }
                                        span { class: "font-semibold text-success", "{score}" }
                                    }
                                }
                            )
                        }
                    }
                }
            }
        }
    )
}
