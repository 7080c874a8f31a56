//! KAP notification list with sync and CSV export.

use common::{
    company_config::CompanyConfig,
    csv_export::CsvRecord,
    format::{format_date_time, MISSING_VALUE},
    ir_models::{KapNotification, KapNotificationKind},
};
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdOpenInNew, md_navigation_icons::MdRefresh}};

use crate::{
    api::ir_api::{get_kap_notifications, sync_kap},
    browser_download::to_csv_records,
    components::{
        csv_export_button::CsvExportButton,
        error_boundary::ComponentErrorDisplay,
        page_section::{EmptyState, PageSection},
        suspend_boundary::LoadingIndicator,
    },
};


/// KAP notifications page
#[component]
pub fn KapPage() -> Element {
    let config = use_context::<CompanyConfig>();
    let mut notifications = use_resource(|| get_kap_notifications());
    let mut syncing = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let records = use_memo(move || export_records(notifications.read().as_ref()));

    let do_sync = use_callback(move |_: ()| {
        if *syncing.read() {
            return;
        }
        syncing.set(true);
        error.set(None);
        spawn(async move {
            match sync_kap().await {
                Ok(result) => {
                    tracing::info!("KAP sync finished: {} ({} notifications)", result.status, result.count);
                    notifications.restart();
                }
                Err(e) => {
                    tracing::error!("KAP sync failed: {e}");
                    error.set(Some("KAP senkronizasyonu başarısız oldu.".to_string()));
                }
            }
            syncing.set(false);
        });
    });

    let (list, load_error) = match notifications.read().clone() {
        Some(Ok(list)) => (Some(list), None),
        Some(Err(e)) => {
            tracing::error!("Failed to load KAP notifications: {e}");
            (Some(vec![]), Some("Veri çekilemedi.".to_string()))
        }
        None => (None, None),
    };
    let banner = error.read().clone().or(load_error);
    let is_syncing = *syncing.read();

    rsx! {
        Title { "{config.name} - KAP Bildirimleri" }
        PageSection {
            title: "KAP Bildirimleri",
            subtitle: "Temsilî bildirimler: tarih, tür ve hızlı bağlantılar",
            actions: rsx! {
                CsvExportButton {
                    label: "KAP listesini Excel'e aktar",
                    filename: config.export_filename("kap"),
                    records: records(),
                }
                SyncButton { syncing: is_syncing, onclick: move |_| do_sync(()) }
            },
            if let Some(banner) = banner {
                div {
                    style: "margin-bottom: 16px;",
                    ComponentErrorDisplay { error_txt: banner }
                }
            }
            {match list {
                None => rsx! {
                    LoadingIndicator {}
                },
                Some(list) if list.is_empty() => rsx! {
                    EmptyState {
                        message: "KAP bildirimi bulunamadı. Demo datası henüz yüklenmemiş olabilir. Senkronizasyonu başlatarak listeyi güncelleyebilirsiniz.",
                        SyncButton { syncing: is_syncing, label: "KAP verisini senkronize et", onclick: move |_| do_sync(()) }
                    }
                },
                Some(list) => rsx! {
                    KapTable { notifications: list }
                },
            }}
        }
    }
}

#[component]
fn SyncButton(
    syncing: bool,
    #[props(default = "KAP Verisini Güncelle".to_string())] label: String,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let text = if syncing { "Senkronize Ediliyor...".to_string() } else { label };
    let opacity = if syncing { "0.7" } else { "1" };
    let icon_class = if syncing { "ir-spin".to_string() } else { String::new() };
    rsx! {
        button {
            disabled: syncing,
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                padding: 8px 16px;
                border: none;
                border-radius: 8px;
                background: #2563EB;
                color: white;
                font-size: 14px;
                cursor: pointer;
                opacity: {opacity};
            ",
            onclick: move |e| onclick.call(e),
            Icon {
                icon: MdRefresh,
                class: icon_class,
                style: "width: 16px; height: 16px;"
            }
            span { "{text}" }
        }
    }
}

/// Rows for the CSV export; nothing while loading or after a failed load.
fn export_records(state: Option<&Result<Vec<KapNotification>, ServerFnError>>) -> Vec<CsvRecord> {
    match state {
        Some(Ok(list)) => to_csv_records(list),
        _ => vec![],
    }
}

fn type_badge_colors(kind: KapNotificationKind) -> (&'static str, &'static str) {
    match kind {
        KapNotificationKind::Financial => ("#EFF6FF", "#1D4ED8"),
        KapNotificationKind::SpecialSituation => ("#FFFBEB", "#B45309"),
        KapNotificationKind::Other => ("#F1F5F9", "#334155"),
    }
}

#[component]
fn KapTable(notifications: Vec<KapNotification>) -> Element {
    rsx! {
        div {
            style: "overflow-x: auto;",
            table {
                style: "width: 100%; border-collapse: collapse; text-align: left;",
                thead {
                    tr {
                        style: "background: #F9FAFB; color: #4B5563; font-size: 14px; border-bottom: 1px solid #F3F4F6;",
                        th { style: "padding: 16px; font-weight: 500;", "Tarih" }
                        th { style: "padding: 16px; font-weight: 500;", "Tür" }
                        th { style: "padding: 16px; font-weight: 500;", "Başlık" }
                        th { style: "padding: 16px; font-weight: 500; text-align: right;", "Detay" }
                    }
                }
                tbody {
                    for notification in notifications {
                        KapRow { key: "{notification.id}", notification }
                    }
                }
            }
        }
    }
}

#[component]
fn KapRow(notification: KapNotification) -> Element {
    let (background, color) = type_badge_colors(notification.kind());
    let published = format_date_time(notification.publish_datetime.as_deref());
    let notification_type = notification.notification_type.clone().unwrap_or_else(|| MISSING_VALUE.to_string());
    let title = notification.title.clone().unwrap_or_else(|| MISSING_VALUE.to_string());
    let url = notification.url.clone().filter(|u| !u.is_empty());
    rsx! {
        tr {
            class: "ir-table-row",
            style: "border-bottom: 1px solid #F9FAFB;",
            td { style: "padding: 16px; font-size: 14px; color: #6B7280; white-space: nowrap;", "{published}" }
            td {
                style: "padding: 16px; font-size: 14px;",
                span {
                    style: "font-size: 12px; padding: 2px 8px; border-radius: 999px; font-weight: 500; background: {background}; color: {color};",
                    "{notification_type}"
                }
            }
            td { style: "padding: 16px; font-size: 14px; font-weight: 500; color: #1E293B;", "{title}" }
            td {
                style: "padding: 16px; text-align: right;",
                if let Some(url) = url {
                    a {
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        title: "KAP'ta aç",
                        class: "ir-hover-shadow-background",
                        style: "display: inline-flex; align-items: center; justify-content: center; padding: 8px; color: #2563EB; border-radius: 999px;",
                        Icon {
                            icon: MdOpenInNew,
                            style: "width: 16px; height: 16px;"
                        }
                    }
                }
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn notification(id: i64, title: &str) -> KapNotification {
        KapNotification {
            id,
            company_code: "TSGYO".to_string(),
            kap_id: format!("14950{id:02}"),
            notification_type: Some("Özel Durum".to_string()),
            title: Some(title.to_string()),
            publish_datetime: Some("2024-10-27 10:45:00".to_string()),
            url: None,
            created_at: None,
        }
    }

    #[test]
    fn export_records_follow_the_loaded_list() {
        let list = vec![notification(1, "Kira sözleşmesi"), notification(2, "Değerleme raporu")];
        let records = export_records(Some(&Ok(list)));
        assert_eq!(records.len(), 2);
        let keys: Vec<&str> = records[0].keys().collect();
        assert_eq!(keys[..4], ["id", "company_code", "kap_id", "type"]);
    }

    #[test]
    fn nothing_to_export_while_loading_or_after_failure() {
        assert!(export_records(None).is_empty());
        let failed: Result<Vec<KapNotification>, ServerFnError> = Err(ServerFnError::ServerError {
            message: "upstream down".to_string(),
            code: 500,
            details: None,
        });
        assert!(export_records(Some(&failed)).is_empty());
    }
}
