use serde::Serialize;
use serde_json::Value;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::ui;

pub mod table;

/// Row types that list views render as table columns.
pub trait TableRow {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

/// A titled summary block followed by a row table.
///
/// JSON output is `{"title", "summary", "rows"}` with the summary serialized
/// as-is; table output uses the human labels in `summary_lines`.
pub struct ListView<'a, S, R> {
    pub title: String,
    pub summary: &'a S,
    pub summary_lines: Vec<(String, String)>,
    pub rows: Vec<R>,
}

impl<S: Serialize, R: Serialize + TableRow> ListView<'_, S, R> {
    pub fn render(&self, format: OutputFormat) -> anyhow::Result<String> {
        let document = ListDocument {
            title: &self.title,
            summary: self.summary,
            rows: &self.rows,
        };
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&document)?),
            OutputFormat::Raw => Ok(serde_json::to_string(&document)?),
            OutputFormat::Table => {
                let mut sections = vec![self.title.clone()];
                if !self.summary_lines.is_empty() {
                    sections.push(table::render_pairs(&self.summary_lines));
                }
                sections.push(render_rows(&self.rows, table_options()));
                Ok(sections.join("\n\n"))
            }
        }
    }
}

#[derive(Serialize)]
struct ListDocument<'a, S, R> {
    title: &'a str,
    summary: &'a S,
    rows: &'a [R],
}

/// Outcome of a mutating command.
#[derive(Debug, Serialize)]
pub struct Notice {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_value_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Print a list view in the requested format.
pub fn output_list<S, R>(view: &ListView<'_, S, R>, format: OutputFormat) -> anyhow::Result<()>
where
    S: Serialize,
    R: Serialize + TableRow,
{
    println!("{}", view.render(format)?);
    Ok(())
}

/// Print a titled summary: labelled lines in table mode, `value` otherwise.
pub fn output_summary<T: Serialize>(
    title: &str,
    value: &T,
    lines: &[(String, String)],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => println!("{title}\n\n{}", table::render_pairs(lines)),
        format => output(value, format)?,
    }
    Ok(())
}

/// Print rows: a column table in table mode, a JSON array otherwise.
pub fn output_rows<R: Serialize + TableRow>(rows: &[R], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_rows(rows, table_options())),
        format => output(&rows, format)?,
    }
    Ok(())
}

/// Print a notice: a plain line in table mode, an object otherwise.
pub fn notify(notice: &Notice, flags: &GlobalFlags) -> anyhow::Result<()> {
    match flags.format {
        OutputFormat::Table if flags.quiet => Ok(()),
        OutputFormat::Table => {
            println!("{}", notice.message);
            Ok(())
        }
        format => output(notice, format),
    }
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_rows<R: TableRow>(rows: &[R], options: table::TableOptions) -> String {
    if rows.is_empty() {
        return String::from("(no rows)");
    }
    let cells = rows.iter().map(TableRow::cells).collect::<Vec<_>>();
    table::render_table(R::headers(), &cells, options)
}

fn render_value_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options();
    match serde_json::to_value(value)? {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            Ok(table::render_table(&["key", "value"], &rows, options))
        }
        scalar => Ok(value_to_cell(&scalar)),
    }
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_table(&["value"], &rows, options);
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .map(|item| {
            headers
                .iter()
                .map(|header| item.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    table::render_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_to_cell)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}
