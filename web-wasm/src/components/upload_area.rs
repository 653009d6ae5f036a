//! 標的写真アップロードコンポーネント
//!
//! 1枚だけ選択でき、新しく選ぶと前の画像を置き換える。
//! 解析中は選択も破棄もできない。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileList, FileReader};

/// 選択中の標的写真
#[derive(Clone, PartialEq)]
pub struct SelectedImage {
    pub file_name: String,
    pub data_url: String,
}

#[component]
pub fn UploadArea<F>(
    is_analyzing: ReadSignal<bool>,
    on_image_selected: F,
) -> impl IntoView
where
    F: Fn(SelectedImage) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let is_enabled = move || !is_analyzing.get();

    let handle_files = {
        let on_image_selected = on_image_selected.clone();
        move |files: FileList| {
            // 1枚のみ: 先頭のファイルだけ読む
            if let Some(file) = files.get(0) {
                read_file(file, on_image_selected.clone());
            }
        }
    };

    let on_drop = {
        let handle_files = handle_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if !is_enabled() {
                return;
            }

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    handle_files(files);
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if is_enabled() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let handle_files = handle_files.clone();
        move |_| {
            if !is_enabled() {
                return;
            }

            // ファイル選択ダイアログを開く
            let document = web_sys::window().unwrap().document().unwrap();
            let input: web_sys::HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept("image/*");

            let handle_files = handle_files.clone();
            let input_clone = input.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(files) = input_clone.files() {
                    handle_files(files);
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if !is_enabled() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="upload-icon">"🎯"</div>
            <p>"標的写真をドラッグ&ドロップ または クリックして選択"</p>
            <p class="text-muted">"対応形式: JPEG, PNG"</p>
        </div>
    }
}

fn read_file<F>(file: File, on_image_selected: F)
where
    F: Fn(SelectedImage) + 'static,
{
    let file_name = file.name();
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_image_selected(SelectedImage {
                    file_name: file_name.clone(),
                    data_url,
                });
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
