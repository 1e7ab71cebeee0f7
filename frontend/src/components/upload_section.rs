use super::handlers;
use super::preprocess_form::PreprocessPanel;
use super::utils::{collect_files, debounce, render_busy_label, render_error_message};
use gloo_events::EventListener;
use shared::workflow::UploadState;
use shared::ApiError;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent, File, HtmlInputElement};
use yew::prelude::*;

pub enum Msg {
    FilesAdded(Vec<File>),
    UploadFinished(Result<(), ApiError>),
    SetDragging(bool),
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

/// Dataset upload: picker, drop zone and clipboard paste all end up in the
/// same single-file check. The preprocessing form appears once a dataset
/// made it to the server.
pub struct UploadPanel {
    pub upload: UploadState,
    pub is_dragging: bool,
    file_input: NodeRef,
    _paste_listener: Option<EventListener>,
}

impl Component for UploadPanel {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let paste_listener = web_sys::window().map(|window| {
            let link = ctx.link().clone();
            EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            })
        });

        Self {
            upload: UploadState::default(),
            is_dragging: false,
            file_input: NodeRef::default(),
            _paste_listener: paste_listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FilesAdded(files) => handlers::handle_files(self, ctx, files),
            Msg::UploadFinished(outcome) => handlers::handle_upload_finished(self, outcome),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="upload-section">
                { self.render_file_input_area(ctx) }
                { render_error_message(self.upload.error.as_deref()) }
                { self.render_upload_notice() }
                {
                    if self.upload.can_preprocess() {
                        html! { <PreprocessPanel reload={self.upload.reload} /> }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}

impl UploadPanel {
    fn render_file_input_area(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let handle_change = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let files = input.files().as_ref().map(collect_files).unwrap_or_default();
            input.set_value("");
            Msg::FilesAdded(files)
        });

        let handle_drag_over = link.callback(|e: DragEvent| {
            e.prevent_default();
            Msg::SetDragging(true)
        });

        let handle_drag_leave = link.callback(|e: DragEvent| {
            e.prevent_default();
            Msg::SetDragging(false)
        });

        let handle_drop = link.callback(Msg::HandleDrop);
        let trigger_file_input = {
            let file_input = self.file_input.clone();
            move || {
                if let Some(input) = file_input.cast::<HtmlInputElement>() {
                    input.click();
                }
            }
        };

        html! {
            <>
                <input
                    type="file"
                    ref={self.file_input.clone()}
                    accept=".json,application/json"
                    style="display: none;"
                    onchange={handle_change}
                />

                <div
                    id="drop-zone"
                    class={classes!("upload-area", self.is_dragging.then_some("drag-over"))}
                    ondragover={handle_drag_over}
                    ondragleave={handle_drag_leave}
                    ondrop={handle_drop}
                    onclick={debounce(300, trigger_file_input)}
                >
                    <div class="upload-placeholder">
                        <i class="fa-solid fa-cloud-arrow-up"></i>
                        <p>
                            { render_busy_label(
                                self.upload.uploading,
                                "Drop a dataset here, paste it, or click to choose one",
                                "Uploading...",
                            ) }
                        </p>
                        <p class="file-types">{"One JSON capture file at a time"}</p>
                    </div>
                </div>
            </>
        }
    }

    fn render_upload_notice(&self) -> Html {
        if self.upload.succeeded {
            html! {
                <p class="success-message">
                    <i class="fa-solid fa-circle-check"></i>{" File uploaded. Choose how to clean it below."}
                </p>
            }
        } else {
            html! {}
        }
    }
}
