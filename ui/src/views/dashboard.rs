//! Authenticated task dashboard: list, create, edit, toggle and delete.

use api::tasks::{self, Task, TaskUpdate};
use dioxus::prelude::*;

use crate::chatbot::{ChatProvider, ChatWidget};
use crate::components::{
    use_toast, Button, ButtonSize, ButtonVariant, Card, CardContent, EmptyState, Heading, Input,
    Modal, SkeletonCard, Text, ThemeToggle,
};
use crate::icons::{FaCheck, FaPenToSquare, FaPlus, FaTrash};
use crate::{use_auth, Icon, LogoutButton};

#[component]
pub fn Dashboard(on_unauthenticated: EventHandler<()>) -> Element {
    let client = crate::use_api();
    let auth = use_auth();
    let mut toasts = use_toast();

    let mut task_list = use_signal(Vec::<Task>::new);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| Option::<String>::None);

    let mut show_create = use_signal(|| false);
    let mut editing = use_signal(|| Option::<Task>::None);
    let mut deleting = use_signal(|| Option::<Task>::None);

    let mut form_title = use_signal(String::new);
    let mut form_description = use_signal(String::new);
    let mut saving = use_signal(|| false);

    use_future({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match tasks::list_tasks(&client).await {
                    Ok(tasks) => task_list.set(tasks),
                    Err(err) => {
                        tracing::error!("failed to load tasks: {err}");
                        load_error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            }
        }
    });

    // Anonymous visitors go back to sign-in. Kept after the hooks so the
    // hook order stays stable across renders.
    if !auth().loading && auth().user.is_none() {
        on_unauthenticated.call(());
        return rsx! {};
    }

    let email = auth()
        .user
        .map(|user| user.email)
        .unwrap_or_default();

    let open_create = move |_| {
        form_title.set(String::new());
        form_description.set(String::new());
        show_create.set(true);
    };

    let handle_create = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn(async move {
                let title = form_title().trim().to_string();
                if title.is_empty() {
                    return;
                }
                let description = form_description().trim().to_string();
                let description = (!description.is_empty()).then_some(description);

                saving.set(true);
                match tasks::create_task(&client, &title, description.as_deref()).await {
                    Ok(task) => {
                        task_list.with_mut(|list| list.insert(0, task));
                        show_create.set(false);
                        toasts.success("Task created");
                    }
                    Err(err) => {
                        tracing::error!("failed to create task: {err}");
                        toasts.error(err.to_string());
                    }
                }
                saving.set(false);
            });
        }
    };

    let handle_update = {
        let client = client.clone();
        move |_| {
            let Some(task) = editing() else { return };
            let client = client.clone();
            spawn(async move {
                let title = form_title().trim().to_string();
                if title.is_empty() {
                    return;
                }
                let description = form_description().trim().to_string();
                let update = TaskUpdate {
                    title: Some(title),
                    description: (!description.is_empty()).then_some(description),
                    status: None,
                };

                saving.set(true);
                match tasks::update_task(&client, &task.id, &update).await {
                    Ok(updated) => {
                        task_list.with_mut(|list| {
                            if let Some(slot) = list.iter_mut().find(|t| t.id == updated.id) {
                                *slot = updated;
                            }
                        });
                        editing.set(None);
                        toasts.success("Task updated");
                    }
                    Err(err) => {
                        tracing::error!("failed to update task: {err}");
                        toasts.error(err.to_string());
                    }
                }
                saving.set(false);
            });
        }
    };

    let handle_delete = {
        let client = client.clone();
        move |_| {
            let Some(task) = deleting() else { return };
            let client = client.clone();
            spawn(async move {
                saving.set(true);
                match tasks::delete_task(&client, &task.id).await {
                    Ok(()) => {
                        task_list.with_mut(|list| list.retain(|t| t.id != task.id));
                        deleting.set(None);
                        toasts.success("Task deleted");
                    }
                    Err(err) => {
                        tracing::error!("failed to delete task: {err}");
                        toasts.error(err.to_string());
                    }
                }
                saving.set(false);
            });
        }
    };

    let toggle = {
        let client = client.clone();
        move |task_id: String| {
            let client = client.clone();
            spawn(async move {
                match tasks::toggle_task_completion(&client, &task_id).await {
                    Ok(updated) => task_list.with_mut(|list| {
                        if let Some(slot) = list.iter_mut().find(|t| t.id == updated.id) {
                            *slot = updated;
                        }
                    }),
                    Err(err) => {
                        tracing::error!("failed to toggle task: {err}");
                        toasts.error(err.to_string());
                    }
                }
            });
        }
    };

    rsx! {
        div {
            class: "min-h-screen bg-slate-50 dark:bg-slate-900",

            header {
                class: "flex items-center justify-between px-6 py-4 bg-white dark:bg-slate-800 border-b border-slate-200 dark:border-slate-700",
                div {
                    Heading { level: 1, "Dashboard" }
                    if !email.is_empty() {
                        Text { muted: true, "Welcome, {email}" }
                    }
                }
                div {
                    class: "flex items-center gap-2",
                    ThemeToggle {}
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: open_create,
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        "New Task"
                    }
                    LogoutButton {
                        class: "px-4 py-2 text-sm rounded-xl text-slate-600 dark:text-slate-300 hover:bg-slate-100 dark:hover:bg-slate-700 transition-colors",
                    }
                }
            }

            main {
                class: "max-w-3xl mx-auto px-6 py-8",

                if loading() {
                    SkeletonCard { rows: 3 }
                } else if let Some(err) = load_error() {
                    div {
                        class: "px-4 py-3 bg-red-50 dark:bg-red-900/30 border border-red-200 dark:border-red-800 rounded-xl text-red-600 dark:text-red-300 text-sm",
                        "Could not load your tasks: {err}"
                    }
                } else if task_list().is_empty() {
                    EmptyState {
                        title: "No tasks yet",
                        description: "Create your first task and keep track of what matters.",
                        action: rsx! {
                            Button {
                                variant: ButtonVariant::Primary,
                                onclick: open_create,
                                Icon { icon: FaPlus, width: 12, height: 12 }
                                "New Task"
                            }
                        },
                    }
                } else {
                    div {
                        class: "space-y-3",
                        for task in task_list() {
                            TaskCard {
                                key: "{task.id}",
                                task: task.clone(),
                                on_toggle: {
                                    let mut toggle = toggle.clone();
                                    move |id: String| toggle(id)
                                },
                                on_edit: move |task: Task| {
                                    form_title.set(task.title.clone());
                                    form_description
                                        .set(task.description.clone().unwrap_or_default());
                                    editing.set(Some(task));
                                },
                                on_delete: move |task: Task| deleting.set(Some(task)),
                            }
                        }
                    }
                }
            }

            if show_create() {
                Modal {
                    title: "New Task",
                    on_close: move |_| show_create.set(false),
                    TaskForm {
                        title: form_title,
                        description: form_description,
                        submit_label: "Create",
                        busy: saving(),
                        on_submit: handle_create,
                        on_cancel: move |_| show_create.set(false),
                    }
                }
            }

            if editing().is_some() {
                Modal {
                    title: "Edit Task",
                    on_close: move |_| editing.set(None),
                    TaskForm {
                        title: form_title,
                        description: form_description,
                        submit_label: "Save",
                        busy: saving(),
                        on_submit: handle_update,
                        on_cancel: move |_| editing.set(None),
                    }
                }
            }

            if let Some(task) = deleting() {
                Modal {
                    title: "Delete Task",
                    on_close: move |_| deleting.set(None),
                    Text { "Delete \"{task.title}\"? This cannot be undone." }
                    div {
                        class: "flex justify-end gap-2 mt-5",
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| deleting.set(None),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            disabled: saving(),
                            onclick: handle_delete,
                            "Delete"
                        }
                    }
                }
            }

            ChatProvider {
                ChatWidget {}
            }
        }
    }
}

#[component]
fn TaskCard(
    task: Task,
    on_toggle: EventHandler<String>,
    on_edit: EventHandler<Task>,
    on_delete: EventHandler<Task>,
) -> Element {
    let completed = task.status.is_completed();
    let title_class = if completed {
        "line-through text-slate-400 dark:text-slate-500"
    } else {
        "text-slate-900 dark:text-slate-50"
    };
    let check_class = if completed {
        "bg-emerald-600 border-emerald-600 text-white"
    } else {
        "border-slate-300 dark:border-slate-500 text-transparent hover:border-emerald-500"
    };
    let created = task.created_at.format("%b %e, %Y");

    rsx! {
        Card {
            CardContent {
                div {
                    class: "flex items-start gap-3",
                    button {
                        class: "mt-0.5 w-5 h-5 shrink-0 rounded-full border-2 flex items-center justify-center transition-colors {check_class}",
                        aria_label: if completed { "Mark as pending" } else { "Mark as completed" },
                        onclick: {
                            let id = task.id.clone();
                            move |_| on_toggle.call(id.clone())
                        },
                        Icon { icon: FaCheck, width: 10, height: 10 }
                    }
                    div {
                        class: "flex-1 min-w-0",
                        p { class: "font-medium truncate {title_class}", "{task.title}" }
                        if let Some(description) = &task.description {
                            Text { muted: true, class: "mt-0.5", "{description}" }
                        }
                        p {
                            class: "mt-1.5 text-xs text-slate-400 dark:text-slate-500",
                            "Created {created}"
                        }
                    }
                    div {
                        class: "flex gap-1",
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Sm,
                            onclick: {
                                let task = task.clone();
                                move |_| on_edit.call(task.clone())
                            },
                            Icon { icon: FaPenToSquare, width: 12, height: 12 }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Sm,
                            class: "hover:text-red-600",
                            onclick: {
                                let task = task.clone();
                                move |_| on_delete.call(task.clone())
                            },
                            Icon { icon: FaTrash, width: 12, height: 12 }
                        }
                    }
                }
            }
        }
    }
}

/// Shared title/description form used by both the create and edit modals.
/// The submit button stays disabled until the title is non-blank.
#[component]
fn TaskForm(
    title: Signal<String>,
    description: Signal<String>,
    submit_label: String,
    busy: bool,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut title = title;
    let mut description = description;
    let blank = title().trim().is_empty();

    rsx! {
        form {
            class: "flex flex-col gap-4",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            Input {
                id: "task-title",
                label: "Title",
                placeholder: "What needs doing?",
                value: title(),
                oninput: move |evt: FormEvent| title.set(evt.value()),
            }
            Input {
                id: "task-description",
                label: "Description",
                placeholder: "Optional details",
                helper: "Optional",
                value: description(),
                oninput: move |evt: FormEvent| description.set(evt.value()),
            }
            div {
                class: "flex justify-end gap-2 mt-1",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    r#type: "submit",
                    disabled: busy || blank,
                    "{submit_label}"
                }
            }
        }
    }
}
