use dioxus::prelude::*;

use sillage_common::currency::format_rupees;
use sillage_common::session::SessionAccessor;

use super::app::Route;
use super::backend_api::{BackendClient, OrderRow, ProductRow, ReviewRow, UserRow};
use super::session_state::use_session;

#[derive(Clone, Copy, Debug, PartialEq)]
enum AdminTab {
    Users,
    Products,
    Reviews,
    Orders,
}

impl AdminTab {
    fn all() -> &'static [AdminTab] {
        &[
            AdminTab::Users,
            AdminTab::Products,
            AdminTab::Reviews,
            AdminTab::Orders,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            AdminTab::Users => "Users",
            AdminTab::Products => "Products",
            AdminTab::Reviews => "Reviews",
            AdminTab::Orders => "Orders",
        }
    }
}

/// The active tab's rows, fetched through the remote CRUD accessor.
#[derive(Clone, Debug, PartialEq)]
enum TabData {
    Users(Vec<UserRow>),
    Products(Vec<ProductRow>),
    Reviews(Vec<ReviewRow>),
    Orders(Vec<OrderRow>),
}

#[component]
pub fn AdminView() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let mut active_tab = use_signal(|| AdminTab::Users);
    let mut data = use_signal(|| TabData::Users(Vec::new()));
    let mut error_msg = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);

    // Refetch whenever the tab changes.
    use_effect(move || {
        let tab = *active_tab.read();
        if !session.read().is_admin() {
            return;
        }
        spawn(async move {
            loading.set(true);
            match BackendClient::from_env() {
                Some(client) => {
                    let result = match tab {
                        AdminTab::Users => client.list_users().await.map(TabData::Users),
                        AdminTab::Products => {
                            client.list_products().await.map(TabData::Products)
                        }
                        AdminTab::Reviews => client.list_reviews().await.map(TabData::Reviews),
                        AdminTab::Orders => client.list_orders().await.map(TabData::Orders),
                    };
                    match result {
                        Ok(rows) => {
                            data.set(rows);
                            error_msg.set(None);
                        }
                        Err(err) => {
                            tracing::error!("Admin fetch failed: {err}");
                            error_msg.set(Some(err));
                        }
                    }
                }
                None => {
                    error_msg.set(Some("No storefront backend configured".to_string()));
                }
            }
            loading.set(false);
        });
    });

    // Admins only; everyone else goes to the sign-in page.
    if !session.read().is_admin() {
        nav.replace(Route::Auth {});
        return rsx! {};
    }

    let is_loading = *loading.read();

    let table = match data.read().clone() {
        TabData::Users(rows) => rsx! { UsersTable { rows } },
        TabData::Products(rows) => rsx! { ProductsTable { rows } },
        TabData::Reviews(rows) => rsx! { ReviewsTable { rows } },
        TabData::Orders(rows) => rsx! { OrdersTable { rows } },
    };

    rsx! {
        div { class: "admin-view",
            h2 { "Admin Dashboard" }

            div { class: "admin-tabs",
                {AdminTab::all().iter().map(|&tab| {
                    let is_active = *active_tab.read() == tab;
                    rsx! {
                        button {
                            class: if is_active { "admin-tab admin-tab-active" } else { "admin-tab" },
                            key: "{tab.label()}",
                            onclick: move |_| active_tab.set(tab),
                            "{tab.label()}"
                        }
                    }
                })}
            }

            div { class: "admin-table-card",
                if let Some(ref err) = *error_msg.read() {
                    div { class: "alert alert-error", "{err}" }
                } else if is_loading {
                    p { class: "empty-state", "Fetching data..." }
                } else {
                    {table}
                }
            }
        }
    }
}

#[component]
fn UsersTable(rows: Vec<UserRow>) -> Element {
    rsx! {
        table { class: "admin-table",
            thead {
                tr {
                    th { "Name" }
                    th { "Admin" }
                }
            }
            tbody {
                {rows.iter().map(|row| rsx! {
                    tr { key: "{row.id}",
                        td { "{row.full_name}" }
                        td { if row.is_admin { "✓" } else { "-" } }
                    }
                })}
            }
        }
    }
}

#[component]
fn ProductsTable(rows: Vec<ProductRow>) -> Element {
    rsx! {
        table { class: "admin-table",
            thead {
                tr {
                    th { "Product" }
                    th { "Brand" }
                    th { "Category" }
                }
            }
            tbody {
                {rows.iter().map(|row| rsx! {
                    tr { key: "{row.id}",
                        td { "{row.name}" }
                        td { "{row.brand}" }
                        td { "{row.category}" }
                    }
                })}
            }
        }
    }
}

#[component]
fn ReviewsTable(rows: Vec<ReviewRow>) -> Element {
    rsx! {
        table { class: "admin-table",
            thead {
                tr {
                    th { "User" }
                    th { "Product" }
                    th { "Rating" }
                    th { "Comment" }
                }
            }
            tbody {
                {rows.iter().map(|row| rsx! {
                    tr { key: "{row.id}",
                        td { "{row.user_name}" }
                        td { "{row.product_name}" }
                        td { class: "rating-cell", "{row.rating}/5" }
                        td { class: "comment-cell", "\"{row.comment}\"" }
                    }
                })}
            }
        }
    }
}

#[component]
fn OrdersTable(rows: Vec<OrderRow>) -> Element {
    rsx! {
        table { class: "admin-table",
            thead {
                tr {
                    th { "Order ID" }
                    th { "Customer" }
                    th { "Total" }
                    th { "Status" }
                }
            }
            tbody {
                {rows.iter().map(|row| {
                    let total = format_rupees(row.total_amount);
                    rsx! {
                        tr { key: "{row.id}",
                            td { class: "mono", "{row.id}" }
                            td { "{row.customer_name}" }
                            td { "{total}" }
                            td { span { class: "status-pill", "{row.status}" } }
                        }
                    }
                })}
            }
        }
    }
}
