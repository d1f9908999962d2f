use leptos::prelude::*;

use crate::features::kanban::callbacks::{CardCallbacks, CardEvent};
use crate::models::tag::visible_tags;
use crate::models::{Card, CardAction, CardKind, TagDefinition, TagDisplaySettings};

#[component]
pub fn CardView(
    card: Card,
    #[prop(into)] column_id: String,
    callbacks: CardCallbacks,
    #[prop(optional)] tag_definitions: Vec<TagDefinition>,
    #[prop(optional)] tag_display: TagDisplaySettings,
    #[prop(optional)] has_broken_links: bool,
    #[prop(optional)] extra_actions: Vec<CardAction>,
) -> impl IntoView {
    let id = card.id.clone();
    let (tags, hidden_tags) = visible_tags(&card.tags, &tag_definitions, &tag_display);
    let (card_actions, task_actions): (Vec<CardAction>, Vec<CardAction>) =
        extra_actions.into_iter().partition(|a| !a.per_task);
    let marker = card.status_marker;

    let emit = {
        let id = id.clone();
        move |event: CardEvent| {
            callbacks.emit(&id, event);
        }
    };

    view! {
        <div
            class="card"
            class:window-card={card.kind == CardKind::Window}
            class:broken-links=has_broken_links
            data-card-id=id.clone()
            data-column-id=column_id
            on:click={
                let emit = emit.clone();
                move |_| emit(CardEvent::Click)
            }
        >
            <div class="card-header">
                <button
                    class="card-status"
                    title=marker.label()
                    on:click={
                        let emit = emit.clone();
                        move |e| {
                            e.stop_propagation();
                            emit(CardEvent::UpdateStatusMarker(marker.next()));
                        }
                    }
                >{marker.glyph()}</button>
                <h4 class="card-title">{card.title.clone()}</h4>
                {has_broken_links.then(|| view! {
                    <span class="card-broken-link" title="This card links to cards that no longer exist">"⚠"</span>
                })}
            </div>

            <textarea
                class="card-description"
                placeholder="Add a description"
                prop:value=card.description.clone()
                on:click=|e| e.stop_propagation()
                on:change={
                    let emit = emit.clone();
                    move |ev| emit(CardEvent::UpdateDescription(event_target_value(&ev)))
                }
            ></textarea>

            {(!tags.is_empty()).then(|| view! {
                <div class="card-tags">
                    {tags.into_iter().map(|(name, color)| view! {
                        <span class="card-tag" style=format!("background-color: {}", color)>{name}</span>
                    }).collect_view()}
                    {(hidden_tags > 0).then(|| view! { <span class="card-tag more">{format!("+{}", hidden_tags)}</span> })}
                </div>
            })}

            {(!card.tasks.is_empty()).then(|| view! {
                <ul class="card-tasks">
                    {card.tasks.iter().enumerate().map(|(index, task)| {
                        let actions = task_actions.clone();
                        let emit = emit.clone();
                        view! {
                            <li class="card-task" class:done=task.done>
                                <span>{task.text.clone()}</span>
                                {actions.into_iter().map(|action| {
                                    let emit = emit.clone();
                                    let action_id = action.id.clone();
                                    view! {
                                        <button class="card-task-action" on:click=move |e| {
                                            e.stop_propagation();
                                            emit(CardEvent::Action { action_id: action_id.clone(), task_index: Some(index) });
                                        }>{action.label}</button>
                                    }
                                }).collect_view()}
                            </li>
                        }
                    }).collect_view()}
                </ul>
            })}

            <div class="card-actions">
                {card_actions.into_iter().map(|action| {
                    let emit = emit.clone();
                    let action_id = action.id.clone();
                    view! {
                        <button class="card-action-btn" on:click=move |e| {
                            e.stop_propagation();
                            emit(CardEvent::Action { action_id: action_id.clone(), task_index: None });
                        }>{action.label}</button>
                    }
                }).collect_view()}
                <button class="card-action-btn jump-btn" title="Jump to card" on:click={
                    let emit = emit.clone();
                    move |e| { e.stop_propagation(); emit(CardEvent::Jump); }
                }>"⤴"</button>
                <button class="card-action-btn edit-btn" title="Edit card" on:click={
                    let emit = emit.clone();
                    move |e| { e.stop_propagation(); emit(CardEvent::Edit); }
                }>"✎"</button>
                {callbacks.offers_archive().then(|| {
                    let emit = emit.clone();
                    view! {
                        <button class="card-action-btn archive-btn" title="Archive card" on:click=move |e| {
                            e.stop_propagation();
                            emit(CardEvent::Archive);
                        }>"🗄"</button>
                    }
                })}
                <button class="card-action-btn delete-btn" title="Delete card" on:click={
                    let emit = emit.clone();
                    move |e| { e.stop_propagation(); emit(CardEvent::Delete); }
                }>"🞮"</button>
            </div>
        </div>
    }
}
