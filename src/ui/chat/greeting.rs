//! Greeting and sample prompts shown before the first submission.

use leptos::prelude::*;

use super::sample_url;
use crate::ui::components::{Button, ButtonVariant, LeafIcon};

/// Welcome text plus one button per sample prompt.
///
/// Choosing a prompt fills the input; it does not submit.
#[component]
pub fn Greeting(
    /// Widget the prompts belong to.
    #[prop(into)]
    widget_id: String,
    /// Sample prompts, in display order.
    prompts: Vec<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-6" id="sample-prompts">
            <div class="flex items-start space-x-3 mb-8">
                <LeafIcon size=24 class="mt-1" />
                <div class="flex-1">
                    <div class="text-foreground">
                        <p class="text-lg">"Hello there!👋"</p>
                        <p class="text-muted-foreground mt-1">"How can I help you today?"</p>
                    </div>
                </div>
            </div>

            <div class="flex flex-wrap gap-3">
                {prompts
                    .into_iter()
                    .enumerate()
                    .map(|(index, prompt)| {
                        view! {
                            <Button
                                variant=ButtonVariant::Outline
                                hx_post=sample_url(&widget_id, index)
                                class="text-left h-auto py-3 px-4 whitespace-normal"
                            >
                                {prompt}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
