use yew::prelude::*;
use web_sys::{FormData, HtmlFormElement};
use shared::{FieldKind, FieldSpec, FormSpec, FormSubmission};

/// Collect the raw value of every submittable field in `spec` from the form element.
pub fn read_submission(form: &HtmlFormElement, spec: &FormSpec) -> FormSubmission {
    let mut submission = FormSubmission::new();
    let data = match FormData::new_with_form(form) {
        Ok(data) => data,
        Err(_) => return submission,
    };

    for field in &spec.fields {
        if matches!(field.kind, FieldKind::ReadOnly { .. }) {
            continue;
        }
        if let Some(value) = data.get(&field.name).as_string() {
            submission.set(&field.name, &value);
        }
    }
    submission
}

#[derive(Properties, PartialEq)]
pub struct FormFieldsProps {
    pub spec: FormSpec,
}

#[function_component(FormFields)]
pub fn form_fields(props: &FormFieldsProps) -> Html {
    html! {
        <>
            {for props.spec.fields.iter().map(render_field)}
        </>
    }
}

fn render_field(field: &FieldSpec) -> Html {
    let id = format!("field-{}", field.name);
    let placeholder = field.placeholder.clone().unwrap_or_default();

    let control = match &field.kind {
        FieldKind::ReadOnly { value } => html! {
            <div class="form-readonly" id={id.clone()}>{value}</div>
        },
        FieldKind::Text { max_length } => html! {
            <input
                type="text"
                id={id.clone()}
                name={field.name.clone()}
                {placeholder}
                maxlength={max_length.map(|max| max.to_string())}
                required={field.required}
            />
        },
        FieldKind::Number { min, step } => html! {
            <input
                type="number"
                id={id.clone()}
                name={field.name.clone()}
                {placeholder}
                min={min.to_string()}
                step={step.to_string()}
                required={field.required}
            />
        },
        FieldKind::Select { options } => html! {
            <select id={id.clone()} name={field.name.clone()} required={field.required}>
                {if field.placeholder.is_some() {
                    html! { <option value="" selected=true>{placeholder}</option> }
                } else {
                    html! {}
                }}
                {for options.iter().map(|option| html! {
                    <option value={option.value.clone()}>{&option.label}</option>
                })}
            </select>
        },
    };

    html! {
        <div class="form-group">
            <label for={id}>{&field.label}</label>
            {control}
        </div>
    }
}
