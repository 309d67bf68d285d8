use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api,
        components::{ErrorPanel, Loading, Page, PageHeader, StatCard, StatIcon},
    },
    model::{
        analytics::{AnalyticsDto, ChartPointDto, TimeRange},
        format,
    },
};

/// Rows shown in the daily breakdown table, newest first.
const TABLE_ROWS: usize = 10;

/// Revenue of each point as a percentage of the busiest day, for bar heights.
pub fn revenue_bars(points: &[ChartPointDto]) -> Vec<u32> {
    let peak = points.iter().map(|p| p.revenue).max().unwrap_or(0);
    if peak == 0 {
        return vec![0; points.len()];
    }

    points
        .iter()
        .map(|p| ((p.revenue as f64 / peak as f64) * 100.0).round() as u32)
        .collect()
}

#[component]
pub fn AnalyticsPage() -> Element {
    let mut range = use_signal(TimeRange::default);

    let mut report = use_resource(move || async move {
        let result = api::analytics::get_analytics(range()).await;
        if let Err(err) = &result {
            tracing::warn!("Failed to load analytics: {}", err);
        }
        result
    });

    let range_value = range().as_str();
    let body = match &*report.read() {
        None => rsx!(Loading { cards: 4 }),
        Some(Err(_)) => rsx!(ErrorPanel {
            message: "Failed to load analytics",
            onretry: move |_| report.restart(),
        }),
        Some(Ok(data)) => rsx!(Report { data: data.clone() }),
    };

    rsx!(
        Title { "Analytics | InfluenceHub" }
        Meta {
            name: "description",
            content: "Revenue, views and conversion reports."
        }
        Page {
            PageHeader {
                title: "Analytics",
                subtitle: "Track your campaign performance and insights".to_string(),
                select {
                    class: "select select-sm",
                    value: range_value,
                    onchange: move |evt| range.set(TimeRange::parse(&evt.value())),
                    for choice in TimeRange::ALL {
                        {
                            let value = choice.as_str();
                            let label = choice.label();
                            rsx!(option { key: "{value}", value: value, "{label}" })
                        }
                    }
                }
            }
            {body}
        }
    )
}

#[component]
fn Report(data: AnalyticsDto) -> Element {
    let revenue = format::currency(data.total_revenue);
    let views = format::compact(data.total_views);
    let engagement = format::compact(data.total_engagement);
    let conversion = format::percent(data.conversion_rate);
    let bars = revenue_bars(&data.chart_data);
    let recent: Vec<ChartPointDto> = data
        .chart_data
        .iter()
        .rev()
        .take(TABLE_ROWS)
        .cloned()
        .collect();

    rsx!(
        div { class: "grid gap-4 sm:grid-cols-2 xl:grid-cols-4",
            StatCard { title: "Total Revenue", value: revenue, icon: StatIcon::Revenue }
            StatCard { title: "Total Views", value: views, icon: StatIcon::Views }
            StatCard { title: "Engagement", value: engagement, icon: StatIcon::Users }
            StatCard { title: "Conversion Rate", value: conversion, icon: StatIcon::Rate }
        }
        div { class: "card bg-base-100 shadow-sm",
            div { class: "card-body",
                h3 { class: "card-title", "Revenue Over Time" }
                div { class: "flex items-end gap-px h-48",
                    for (point, height) in data.chart_data.iter().zip(bars) {
                        {
                            let date = point.date.format("%b %d").to_string();
                            rsx!(
                                div {
                                    key: "{point.date}",
                                    class: "flex-1 bg-primary rounded-t tooltip",
                                    "data-tip": "{date}: ${point.revenue}",
                                    style: "height: {height}%",
                                }
                            )
                        }
                    }
                }
            }
        }
        div { class: "grid gap-4 lg:grid-cols-2",
            div { class: "card bg-base-100 shadow-sm",
                div { class: "card-body",
                    h3 { class: "card-title", "Daily Breakdown" }
                    div { class: "overflow-x-auto",
                        table { class: "table table-sm",
                            thead {
                                tr {
                                    th { "Date" }
                                    th { "Revenue" }
                                    th { "Views" }
                                    th { "Conversions" }
                                }
                            }
                            tbody {
                                for point in recent {
                                    {
                                        let date = point.date.format("%b %d, %Y").to_string();
                                        let revenue = format::currency(point.revenue as f64);
                                        rsx!(
                                            tr { key: "{point.date}",
                                                td { "{date}" }
                                                td { "{revenue}" }
                                                td { "{point.views}" }
                                                td { "{point.conversions}" }
                                            }
                                        )
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "flex flex-col gap-4",
                div { class: "card bg-base-100 shadow-sm",
                    div { class: "card-body",
                        h3 { class: "card-title", "Top Products" }
                        ul { class: "flex flex-col gap-2",
                            for product in data.top_products.iter().cloned() {
                                {
                                    let revenue = format::currency(product.revenue);
                                    rsx!(
                                        li { key: "{product.name}", class: "flex justify-between",
                                            span { "{product.name}" }
                                            span { class: "text-base-content/60",
                                                "{revenue} · {product.campaigns} campaigns"
                                            }
                                        }
                                    )
                                }
                            }
                        }
                    }
                }
                div { class: "card bg-base-100 shadow-sm",
                    div { class: "card-body",
                        h3 { class: "card-title", "Top Influencers" }
                        ul { class: "flex flex-col gap-2",
                            for influencer in data.top_influencers.iter().cloned() {
                                {
                                    let engagement = format::percent(influencer.engagement);
                                    rsx!(
                                        li {
                                            key: "{influencer.name}",
                                            class: "flex justify-between",
                                            span { "{influencer.name}" }
                                            span { class: "text-base-content/60",
                                                "{influencer.followers} followers · {engagement}"
                                            }
                                        }
                                    )
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
