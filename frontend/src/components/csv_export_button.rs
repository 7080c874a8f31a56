//! Button that downloads a table as CSV.

use common::csv_export::CsvRecord;
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::md_file_icons::MdFileDownload};

use crate::browser_download::download_csv;

const NOTICE_DURATION_MS: u32 = 3_000;

#[component]
pub fn CsvExportButton(
    #[props(default = "CSV indir".to_string())] label: String,
    filename: String,
    records: ReadSignal<Vec<CsvRecord>>,
) -> Element {
    let mut notice = use_signal(|| None::<String>);

    let do_export = use_callback(move |_: ()| {
        let message = match download_csv(&filename, &records.read()) {
            Ok(true) => "İndirme başlatıldı".to_string(),
            Ok(false) => "Aktarılacak veri yok".to_string(),
            Err(e) => {
                tracing::error!("CSV export of {} failed: {:#?}", filename, e);
                format!("İndirme başarısız: {e}")
            }
        };
        notice.set(Some(message.clone()));
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_DURATION_MS).await;
            // a newer click may have replaced the notice meanwhile
            if notice.read().as_deref() == Some(message.as_str()) {
                notice.set(None);
            }
        });
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: row; align-items: center; gap: 8px;",
            if let Some(text) = notice.read().clone() {
                span {
                    style: "font-size: 12px; color: #64748B;",
                    "{text}"
                }
            }
            button {
                class: "ir-hover-shadow-background",
                style: "
                    display: flex;
                    align-items: center;
                    gap: 6px;
                    padding: 6px 12px;
                    border: 1px solid #E5E7EB;
                    border-radius: 8px;
                    background: white;
                    color: #0F172A;
                    font-size: 13px;
                    font-weight: 500;
                    cursor: pointer;
                ",
                onclick: move |_| do_export(()),
                Icon {
                    icon: MdFileDownload,
                    style: "width: 16px; height: 16px;"
                }
                "{label}"
            }
        }
    }
}
