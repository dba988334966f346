//! Table of the demo user directory.

use leptos::prelude::*;

use crate::net::types::UserDirectory;
use crate::util::format::count_label;

#[component]
pub fn UserTable(directory: UserDirectory) -> impl IntoView {
    let heading = count_label("Users", directory.total);
    let rows = directory
        .users
        .into_iter()
        .map(|user| {
            view! {
                <tr>
                    <td>{user.id.to_string()}</td>
                    <td>{user.username}</td>
                    <td>{user.email}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="data-panel">
            <h2 class="data-panel__title">{heading}</h2>
            <table class="data-panel__table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Username"</th>
                        <th>"Email"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <p class="data-panel__meta">"Requested by " {directory.requested_by}</p>
        </div>
    }
}
