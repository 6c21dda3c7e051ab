//! HTML pages rendered with maud.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::admin::ModelAdmin;
use crate::models::{Document, DocumentForm, FormErrors, TITLE_MAX_LENGTH};
use crate::urls;
use crate::views::FormMode;

fn layout(page_title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page_title) }
                link rel="stylesheet" href="/static/app.css";
                script src="/static/markdownx.js" defer {}
            }
            body {
                main { (body) }
            }
        }
    }
}

fn field_errors(errors: &FormErrors, field: &str) -> Markup {
    let messages = errors.get(field);
    html! {
        @if !messages.is_empty() {
            ul.errorlist {
                @for msg in messages {
                    li { (msg) }
                }
            }
        }
    }
}

/// Title input and markdown editor with live preview, shared by the public and admin forms
fn document_fields(form: &DocumentForm, errors: &FormErrors) -> Markup {
    html! {
        p {
            label for="id_title" { "Title:" }
            (field_errors(errors, "title"))
            input type="text" name="title" id="id_title" maxlength=(TITLE_MAX_LENGTH)
                required value=(form.title);
        }
        div.markdownx {
            label for="id_markdown_description" { "Markdown description:" }
            (field_errors(errors, "markdown_description"))
            textarea.markdownx-editor name="markdown_description" id="id_markdown_description"
                rows="20" cols="80" required
                data-markdownx-urls-path=(urls::MARKDOWNIFY) { (form.markdown_description) }
            div.markdownx-preview {}
        }
    }
}

pub fn document_list(docs: &[Document]) -> Markup {
    layout(
        "Markdown examples",
        html! {
            h1 { "Markdown examples" }
            p { a href=(urls::create_path()) { "Create new" } }
            @if docs.is_empty() {
                p { "No documents yet." }
            } @else {
                ul {
                    @for doc in docs {
                        li {
                            a href=(doc.canonical_location()) { (doc.display_label()) }
                            " "
                            a.edit href=(urls::update_path(doc.id)) { "edit" }
                        }
                    }
                }
            }
        },
    )
}

pub fn document_detail(doc: &Document) -> Markup {
    layout(
        doc.display_label(),
        html! {
            h1 { (doc.display_label()) }
            article.markdown-body { (PreEscaped(doc.render())) }
            p {
                a href=(urls::update_path(doc.id)) { "Edit" }
                " | "
                a href=(urls::list_path()) { "Back to list" }
            }
        },
    )
}

pub fn document_form(mode: FormMode, form: &DocumentForm, errors: &FormErrors) -> Markup {
    let (heading, action) = match mode {
        FormMode::Create => ("Create markdown example".to_string(), urls::create_path()),
        FormMode::Update(id) => ("Update markdown example".to_string(), urls::update_path(id)),
    };

    layout(
        &heading,
        html! {
            h1 { (heading) }
            form method="post" action=(action) {
                (document_fields(form, errors))
                button type="submit" { "Save" }
            }
            p { a href=(urls::list_path()) { "Cancel" } }
        },
    )
}

pub fn not_found(what: &str) -> Markup {
    layout(
        "Not found",
        html! {
            h1 { "Not found" }
            p { (what) }
            p { a href=(urls::list_path()) { "Back to list" } }
        },
    )
}

pub fn admin_index(entries: &[(&ModelAdmin, i64)]) -> Markup {
    layout(
        "Site administration",
        html! {
            h1 { "Site administration" }
            table {
                @for (admin, count) in entries {
                    tr {
                        th { a href=(urls::admin_changelist_path(admin.model)) { (admin.verbose_name_plural) } }
                        td { (count) }
                        td { a href=(urls::admin_add_path(admin.model)) { "Add" } }
                    }
                }
            }
        },
    )
}

pub fn admin_changelist(admin: &ModelAdmin, docs: &[Document], query: Option<&str>) -> Markup {
    let heading = format!("Select {} to change", admin.verbose_name);
    layout(
        &heading,
        html! {
            p { a href=(urls::ADMIN_INDEX) { "Home" } }
            h1 { (heading) }
            p { a href=(urls::admin_add_path(admin.model)) { "Add " (admin.verbose_name) } }
            @if admin.is_searchable() {
                form method="get" action=(urls::admin_changelist_path(admin.model)) {
                    input type="text" name="q" value=(query.unwrap_or(""));
                    button type="submit" { "Search" }
                }
            }
            table {
                thead {
                    tr {
                        @for header in admin.column_headers() {
                            th { (header) }
                        }
                    }
                }
                tbody {
                    @for doc in docs {
                        tr {
                            @for (i, value) in admin.row(doc).into_iter().enumerate() {
                                td {
                                    @if i == 0 {
                                        a href=(urls::admin_change_path(admin.model, doc.id)) { (value) }
                                    } @else {
                                        (value)
                                    }
                                }
                            }
                        }
                    }
                }
            }
            p { (docs.len()) " " (admin.verbose_name_plural) }
        },
    )
}

pub fn admin_form(
    admin: &ModelAdmin,
    existing: Option<&Document>,
    form: &DocumentForm,
    errors: &FormErrors,
) -> Markup {
    let (heading, action) = match existing {
        Some(doc) => (
            format!("Change {}", admin.verbose_name),
            urls::admin_change_path(admin.model, doc.id),
        ),
        None => (
            format!("Add {}", admin.verbose_name),
            urls::admin_add_path(admin.model),
        ),
    };

    layout(
        &heading,
        html! {
            p {
                a href=(urls::ADMIN_INDEX) { "Home" }
                " › "
                a href=(urls::admin_changelist_path(admin.model)) { (admin.verbose_name_plural) }
            }
            h1 { (heading) }
            @if let Some(doc) = existing {
                p { a.viewsitelink href=(doc.canonical_location()) { "View on site" } }
            }
            form method="post" action=(action) {
                (document_fields(form, errors))
                button type="submit" { "Save" }
            }
        },
    )
}
