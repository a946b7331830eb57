//! Project Modal Component

use leptos::prelude::*;

use crate::models::ProjectPayload;

#[component]
pub fn ProjectModal(
    client_id: u32,
    #[prop(into)] on_save: Callback<ProjectPayload>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (deadline, set_deadline) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get();
        if title.trim().is_empty() {
            return;
        }
        let description = description.get();
        let deadline = deadline.get();
        on_save.run(ProjectPayload {
            client_id,
            title,
            description: if description.trim().is_empty() {
                None
            } else {
                Some(description)
            },
            deadline: if deadline.is_empty() {
                None
            } else {
                Some(deadline)
            },
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <h2 class="modal-title">"New Project"</h2>
                <form class="modal-form" on:submit=submit>
                    <label class="field-label">"Title"</label>
                    <input
                        type="text"
                        placeholder="Project title"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    <label class="field-label">"Description (optional)"</label>
                    <textarea
                        placeholder="What is this project about?"
                        rows=3
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                    <label class="field-label">"Deadline (optional)"</label>
                    <input
                        type="date"
                        prop:value=move || deadline.get()
                        on:input=move |ev| set_deadline.set(event_target_value(&ev))
                    />
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary">"Create Project"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
