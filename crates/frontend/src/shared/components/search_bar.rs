use crate::shared::date_utils::day_range_millis;
use crate::shared::icons::icon;
use chrono::{Local, TimeZone};
use contracts::shared::query::Term;
use leptos::ev;
use leptos::prelude::*;
use std::collections::BTreeMap;
use thaw::*;

/// How a searchable column is edited and turned into a term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// Free text, matched with `like`
    Text,
    /// Fixed options `(value, label)`, matched with `eq`
    Select(&'static [(&'static str, &'static str)]),
    /// Pair of dates, matched as a day range over epoch millis
    DateRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchField {
    pub column: &'static str,
    pub label: &'static str,
    pub kind: SearchKind,
}

/// Raw form values keyed by column (date ranges use [`range_keys`])
pub type SearchValues = BTreeMap<String, String>;

pub fn range_keys(column: &str) -> (String, String) {
    (format!("{}.from", column), format!("{}.to", column))
}

fn non_empty<'a>(values: &'a SearchValues, key: &str) -> Option<&'a str> {
    values
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

/// Turn filled-in fields into query terms, in field order. Blank fields are skipped.
pub fn build_terms<Tz: TimeZone>(fields: &[SearchField], values: &SearchValues, tz: &Tz) -> Vec<Term> {
    let mut terms = Vec::new();
    for field in fields {
        match field.kind {
            SearchKind::Text => {
                if let Some(text) = non_empty(values, field.column) {
                    terms.push(Term::like(field.column, text));
                }
            }
            SearchKind::Select(_) => {
                if let Some(value) = non_empty(values, field.column) {
                    terms.push(Term::eq(field.column, value));
                }
            }
            SearchKind::DateRange => {
                let (from_key, to_key) = range_keys(field.column);
                let from = non_empty(values, &from_key);
                let to = non_empty(values, &to_key);
                let term = match (from, to) {
                    (Some(from), Some(to)) => day_range_millis(from, to, tz)
                        .map(|(start, end)| Term::between(field.column, start, end)),
                    (Some(from), None) => day_range_millis(from, from, tz)
                        .map(|(start, _)| Term::gte(field.column, start)),
                    (None, Some(to)) => {
                        day_range_millis(to, to, tz).map(|(_, end)| Term::lte(field.column, end))
                    }
                    (None, None) => None,
                };
                match term {
                    Some(term) => terms.push(term),
                    None if from.is_some() || to.is_some() => {
                        log::warn!("Ignoring invalid date range for {}", field.column);
                    }
                    None => {}
                }
            }
        }
    }
    terms
}

/// Search form over the searchable columns of a table
#[component]
pub fn SearchBar(
    fields: Vec<SearchField>,
    /// Receives the full term set on every submit (empty after reset)
    on_search: Callback<Vec<Term>>,
) -> impl IntoView {
    let values = RwSignal::new(SearchValues::new());
    let fields = StoredValue::new(fields);

    let submit = move || {
        let terms = fields.with_value(|f| values.with(|v| build_terms(f, v, &Local)));
        on_search.run(terms);
    };
    let reset = move || {
        values.set(SearchValues::new());
        on_search.run(Vec::new());
    };

    let set_value = move |key: String, value: String| {
        values.update(|v| {
            v.insert(key, value);
        });
    };
    let get_value = move |key: &str| values.with(|v| v.get(key).cloned().unwrap_or_default());

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit();
        }
    };

    let inputs = fields.with_value(|fields| {
        fields
            .iter()
            .cloned()
            .map(|field| {
                let column = field.column;
                let control = match field.kind {
                    SearchKind::Text => view! {
                        <input
                            type="text"
                            class="search-bar__input"
                            placeholder=field.label
                            prop:value=move || get_value(column)
                            on:input=move |ev| set_value(column.to_string(), event_target_value(&ev))
                        />
                    }
                    .into_any(),
                    SearchKind::Select(options) => view! {
                        <select
                            class="search-bar__select"
                            prop:value=move || get_value(column)
                            on:change=move |ev| set_value(column.to_string(), event_target_value(&ev))
                        >
                            <option value="">"All"</option>
                            {options
                                .iter()
                                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                .collect_view()}
                        </select>
                    }
                    .into_any(),
                    SearchKind::DateRange => {
                        let (from_key, to_key) = range_keys(column);
                        let from_read = from_key.clone();
                        let to_read = to_key.clone();
                        view! {
                            <div class="search-bar__range">
                                <input
                                    type="date"
                                    class="search-bar__input"
                                    prop:value=move || get_value(&from_read)
                                    on:change=move |ev| set_value(from_key.clone(), event_target_value(&ev))
                                />
                                <span class="search-bar__dash">"-"</span>
                                <input
                                    type="date"
                                    class="search-bar__input"
                                    prop:value=move || get_value(&to_read)
                                    on:change=move |ev| set_value(to_key.clone(), event_target_value(&ev))
                                />
                            </div>
                        }
                        .into_any()
                    }
                };
                view! {
                    <label class="search-bar__field">
                        <span class="search-bar__label">{field.label}</span>
                        {control}
                    </label>
                }
            })
            .collect_view()
    });

    view! {
        <div class="search-bar" on:keydown=on_keydown>
            <div class="search-bar__fields">{inputs}</div>
            <Flex gap=FlexGap::Small>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| submit()>
                    {icon("filter")}
                    " Search"
                </Button>
                <Button on_click=move |_| reset()>
                    {icon("x")}
                    " Reset"
                </Button>
            </Flex>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use contracts::shared::query::TermType;
    use serde_json::json;

    const SIGN_OPTIONS: &[(&str, &str)] = &[("md5", "MD5"), ("sha256", "SHA256")];

    fn fields() -> Vec<SearchField> {
        vec![
            SearchField { column: "name", label: "Name", kind: SearchKind::Text },
            SearchField { column: "signMethod", label: "Sign method", kind: SearchKind::Select(SIGN_OPTIONS) },
            SearchField { column: "createTime", label: "Created", kind: SearchKind::DateRange },
        ]
    }

    fn values(pairs: &[(&str, &str)]) -> SearchValues {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_blank_form_yields_no_terms() {
        assert!(build_terms(&fields(), &SearchValues::new(), &Utc).is_empty());
        assert!(build_terms(&fields(), &values(&[("name", "   ")]), &Utc).is_empty());
    }

    #[test]
    fn test_terms_follow_field_kinds() {
        let terms = build_terms(
            &fields(),
            &values(&[
                ("name", " boot "),
                ("signMethod", "md5"),
                ("createTime.from", "2023-11-14"),
                ("createTime.to", "2023-11-14"),
            ]),
            &Utc,
        );

        assert_eq!(terms.len(), 3);
        assert_eq!(terms[0], Term::like("name", "boot"));
        assert_eq!(terms[1].term_type, TermType::Eq);
        assert_eq!(terms[1].value, json!("md5"));
        assert_eq!(terms[2].term_type, TermType::Btw);
        assert_eq!(terms[2].value, json!([1_699_920_000_000i64, 1_700_006_399_999i64]));
    }

    #[test]
    fn test_open_ended_date_range() {
        let from_only = build_terms(&fields(), &values(&[("createTime.from", "2023-11-14")]), &Utc);
        assert_eq!(from_only, vec![Term::gte("createTime", 1_699_920_000_000i64)]);

        let to_only = build_terms(&fields(), &values(&[("createTime.to", "2023-11-14")]), &Utc);
        assert_eq!(to_only, vec![Term::lte("createTime", 1_700_006_399_999i64)]);
    }

    #[test]
    fn test_inverted_date_range_is_dropped() {
        let terms = build_terms(
            &fields(),
            &values(&[("createTime.from", "2023-11-15"), ("createTime.to", "2023-11-14")]),
            &Utc,
        );
        assert!(terms.is_empty());
    }
}
