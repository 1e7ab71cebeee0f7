use super::upload_section::{Msg, UploadPanel};
use super::utils::{collect_files, file_meta};
use crate::api;
use shared::workflow::{check_upload, FileMeta};
use shared::{ApiError, Endpoint};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, File, FileList, FormData};
use yew::prelude::*;

pub fn handle_files(panel: &mut UploadPanel, ctx: &Context<UploadPanel>, files: Vec<File>) -> bool {
    let metas: Vec<FileMeta> = files.iter().map(file_meta).collect();
    if let Err(err) = check_upload(&metas) {
        log::warn!("Upload rejected: {}", err);
        panel.upload.record_failure(err.to_string());
        return true;
    }

    let Some(file) = files.into_iter().next() else {
        return false;
    };
    panel.upload.begin();
    send_upload_request(ctx, file);
    true
}

pub fn handle_upload_finished(panel: &mut UploadPanel, outcome: Result<(), ApiError>) -> bool {
    match outcome {
        Ok(()) => {
            log::info!("Dataset uploaded");
            panel.upload.record_success();
        }
        Err(err) => {
            log::warn!("Upload failed: {}", err);
            panel.upload.record_failure(err.to_string());
        }
    }
    true
}

pub fn handle_drop(panel: &mut UploadPanel, ctx: &Context<UploadPanel>, event: DragEvent) -> bool {
    event.prevent_default();
    panel.is_dragging = false;

    if let Some(data_transfer) = event.data_transfer() {
        if let Some(file_list) = data_transfer.files() {
            process_file_list(ctx, file_list);
        }
    }

    true
}

/// Text pastes fall through to the page; only pasted files are taken.
pub fn handle_paste(ctx: &Context<UploadPanel>, event: ClipboardEvent) -> bool {
    if let Some(data_transfer) = event.clipboard_data() {
        if let Some(file_list) = data_transfer.files() {
            if file_list.length() > 0 {
                event.prevent_default();
                process_file_list(ctx, file_list);
                return true;
            }
        }
    }
    false
}

pub fn process_file_list(ctx: &Context<UploadPanel>, file_list: FileList) {
    ctx.link().send_message(Msg::FilesAdded(collect_files(&file_list)));
}

fn build_form(file: &File) -> Result<FormData, ApiError> {
    let form_data = FormData::new().map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    form_data
        .append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    Ok(form_data)
}

pub fn send_upload_request(ctx: &Context<UploadPanel>, file: File) {
    log::info!("Uploading {} ({} bytes)", file.name(), file.size());
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let outcome = match build_form(&file) {
                Ok(form_data) => api::post_form(Endpoint::Upload, form_data).await,
                Err(err) => Err(err),
            };
            link.send_message(Msg::UploadFinished(outcome));
        }
    });
}
