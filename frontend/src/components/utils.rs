use gloo_timers::callback::Timeout;
use shared::workflow::FileMeta;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{File, FileList};
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

pub fn collect_files(file_list: &FileList) -> Vec<File> {
    (0..file_list.length())
        .filter_map(|i| file_list.item(i))
        .collect()
}

pub fn file_meta(file: &File) -> FileMeta {
    FileMeta::new(file.name(), file.type_())
}

pub fn render_error_message(error: Option<&str>) -> Html {
    if let Some(error_msg) = error {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}

pub fn render_warning(message: &str) -> Html {
    html! {
        <div class="warning-message">
            <i class="fa-solid fa-triangle-exclamation"></i>
            <p>{ message }</p>
        </div>
    }
}

pub fn render_busy_label(busy: bool, idle: &str, working: &str) -> Html {
    if busy {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{ format!(" {}", working) }</> }
    } else {
        html! { { idle.to_string() } }
    }
}
