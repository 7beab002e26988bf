//! Chat header component.

use leptos::prelude::*;

use crate::ui::components::LeafIcon;

/// Page header with the leaf mark and title.
#[component]
pub fn ChatHeader(
    /// Title displayed in the header.
    #[prop(into)]
    title: String,
) -> impl IntoView {
    view! {
        <header class="bg-background border-b border-border p-6 flex-shrink-0">
            <div class="max-w-4xl mx-auto">
                <div class="flex items-center justify-center">
                    <LeafIcon size=32 class="mr-3" />
                    <h1 class="text-2xl font-bold text-primary">{title}</h1>
                </div>
            </div>
        </header>
    }
}
