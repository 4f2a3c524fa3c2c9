use gloo_net::http::Request;
use leptos::prelude::*;
use thiserror::Error;

use crate::config::{FieldKind, FieldSpec, FormConfig};
use crate::constants::NOTICE_CLEAR_DELAY;

pub type FormValues = Vec<(String, String)>;

#[derive(Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error("{0} is required")]
    MissingField(String),
    #[error("could not encode form")]
    Encode,
    #[error("request failed: {0}")]
    Request(String),
    #[error("form service returned {0}")]
    Status(u16),
}

impl SubmitError {
    /// Text shown to the applicant
    pub fn notice(&self) -> String {
        match self {
            SubmitError::MissingField(_) => format!("{}.", self),
            _ => "Something went wrong sending your application. Please try again later.".to_string(),
        }
    }
}

/// Read every configured field through `get`. Checkboxes become "yes"/"no",
/// text is trimmed, missing entries are empty.
pub fn collect_values(fields: &[FieldSpec], get: impl Fn(&str) -> Option<String>) -> FormValues {
    fields
        .iter()
        .map(|field| {
            let raw = get(&field.name);
            let value = match field.kind {
                FieldKind::Checkbox => if raw.is_some() { "yes" } else { "no" }.to_string(),
                FieldKind::Text | FieldKind::Textarea => {
                    raw.map(|v| v.trim().to_string()).unwrap_or_default()
                }
            };
            (field.name.clone(), value)
        })
        .collect()
}

/// Required text fields must be non-blank, required checkboxes ticked.
pub fn validate(fields: &[FieldSpec], values: &[(String, String)]) -> Result<(), SubmitError> {
    for field in fields.iter().filter(|f| f.required) {
        let value = values
            .iter()
            .find(|(name, _)| name == &field.name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("");
        let present = match field.kind {
            FieldKind::Checkbox => value == "yes",
            FieldKind::Text | FieldKind::Textarea => !value.trim().is_empty(),
        };
        if !present {
            return Err(SubmitError::MissingField(field.label.clone()));
        }
    }
    Ok(())
}

fn encode(values: &[(String, String)]) -> Result<String, SubmitError> {
    let params = web_sys::UrlSearchParams::new().map_err(|_| SubmitError::Encode)?;
    for (name, value) in values {
        params.append(name, value);
    }
    Ok(String::from(params.to_string()))
}

pub async fn submit(endpoint: &str, values: &[(String, String)]) -> Result<(), SubmitError> {
    let body = encode(values)?;
    let resp = Request::post(endpoint)
        .header("Accept", "application/json")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| SubmitError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Request(e.to_string()))?;

    if !resp.ok() {
        return Err(SubmitError::Status(resp.status()));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub ok: bool,
}

fn show_notice(notice: RwSignal<Option<Notice>>, n: Notice) {
    notice.set(Some(n.clone()));
    gloo_timers::callback::Timeout::new(NOTICE_CLEAR_DELAY, move || {
        // Leave a newer notice alone
        if notice.try_get_untracked().flatten().as_ref() == Some(&n) {
            notice.set(None);
        }
    })
    .forget();
}

fn field_view(field: &FieldSpec) -> AnyView {
    let class = if field.full_width { "form-field full-width" } else { "form-field" };
    let name = field.name.clone();
    let label = field.label.clone();
    let placeholder = field.placeholder.clone();
    let required = field.required;

    match field.kind {
        FieldKind::Text => view! {
            <div class=class>
                <label for=name.clone()>{label}</label>
                <input type="text" id=name.clone() name=name placeholder=placeholder required=required />
            </div>
        }
        .into_any(),
        FieldKind::Textarea => view! {
            <div class=class>
                <label for=name.clone()>{label}</label>
                <textarea id=name.clone() name=name placeholder=placeholder required=required rows="4"></textarea>
            </div>
        }
        .into_any(),
        FieldKind::Checkbox => view! {
            <div class=format!("{} checkbox", class)>
                <input type="checkbox" id=name.clone() name=name value="yes" required=required />
                <label for=field.name.clone()>{label}</label>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn ApplicationForm(form: FormConfig) -> impl IntoView {
    let form_ref = NodeRef::<leptos::html::Form>::new();
    let sending = RwSignal::new(false);
    let notice = RwSignal::new(None::<Notice>);

    let fields = form.fields.clone();
    let endpoint = form.endpoint.clone();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        let Some(form_el) = form_ref.get() else { return };
        let Ok(data) = web_sys::FormData::new_with_form(&form_el) else {
            return;
        };

        let values = collect_values(&fields, |name| data.get(name).as_string());
        if let Err(e) = validate(&fields, &values) {
            show_notice(notice, Notice { text: e.notice(), ok: false });
            return;
        }

        sending.set(true);
        let endpoint = endpoint.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match submit(&endpoint, &values).await {
                Ok(()) => {
                    form_el.reset();
                    show_notice(notice, Notice {
                        text: "Application sent! We'll be in touch soon.".to_string(),
                        ok: true,
                    });
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("application submit failed: {}", e).into());
                    show_notice(notice, Notice { text: e.notice(), ok: false });
                }
            }
            let _ = sending.try_set(false);
        });
    };

    let submit_label = form.submit_label.clone();

    view! {
        <div class="application-form glass-effect">
            <div class="form-header">
                <h2 class="form-title">{form.title.clone()}</h2>
                <span class="star-icon">"\u{2605}"</span>
            </div>
            <form node_ref=form_ref on:submit=on_submit novalidate=true>
                <div class="form-grid">
                    {form.fields.iter().map(field_view).collect_view()}
                </div>
                <button type="submit" class="submit-button" disabled=move || sending.get()>
                    {move || if sending.get() { "Sending...".to_string() } else { submit_label.clone() }}
                </button>
            </form>
            {move || notice.get().map(|n| view! {
                <p class=if n.ok { "form-notice ok" } else { "form-notice error" }>{n.text}</p>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn field(name: &str, kind: FieldKind, required: bool) -> FieldSpec {
        FieldSpec {
            name: name.to_string(),
            label: name.to_uppercase(),
            kind,
            placeholder: String::new(),
            required,
            full_width: false,
        }
    }

    fn fields() -> Vec<FieldSpec> {
        vec![
            field("twitter", FieldKind::Text, true),
            field("about", FieldKind::Textarea, false),
            field("newsletter", FieldKind::Checkbox, false),
            field("rules", FieldKind::Checkbox, true),
        ]
    }

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn collects_in_field_order() {
        let values = collect_values(&fields(), lookup(&[("twitter", "  @me "), ("rules", "yes")]));
        assert_eq!(
            values,
            vec![
                ("twitter".to_string(), "@me".to_string()),
                ("about".to_string(), String::new()),
                ("newsletter".to_string(), "no".to_string()),
                ("rules".to_string(), "yes".to_string()),
            ]
        );
    }

    #[test]
    fn complete_form_is_valid() {
        let values = collect_values(&fields(), lookup(&[("twitter", "@me"), ("rules", "on")]));
        assert_eq!(validate(&fields(), &values), Ok(()));
    }

    #[test]
    fn blank_required_text_rejected() {
        let values = collect_values(&fields(), lookup(&[("twitter", "   "), ("rules", "yes")]));
        assert_eq!(
            validate(&fields(), &values),
            Err(SubmitError::MissingField("TWITTER".to_string()))
        );
    }

    #[test]
    fn unticked_required_checkbox_rejected() {
        let values = collect_values(&fields(), lookup(&[("twitter", "@me")]));
        assert_eq!(
            validate(&fields(), &values),
            Err(SubmitError::MissingField("RULES".to_string()))
        );
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let fs = vec![field("about", FieldKind::Textarea, false)];
        assert_eq!(validate(&fs, &collect_values(&fs, lookup(&[]))), Ok(()));
    }

    #[test]
    fn notice_text() {
        assert_eq!(SubmitError::MissingField("Discord".into()).notice(), "Discord is required.");
        assert!(SubmitError::Status(500).notice().contains("try again"));
    }
}
