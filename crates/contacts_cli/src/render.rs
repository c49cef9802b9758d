//! Plain-text rendering of contact rows and operation outcomes.

use contacts_core::{Contact, SaveOutcome, UpdateOutcome, EXPORT_HEADER};
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";

/// Renders contacts as left-aligned columns under the export header.
pub fn contacts_table(contacts: &[Contact]) -> String {
    let rows: Vec<[String; 5]> = contacts
        .iter()
        .map(|c| {
            [
                c.id.to_string(),
                c.name.clone(),
                c.age.clone(),
                c.email.clone(),
                c.phone.clone(),
            ]
        })
        .collect();

    let mut widths = EXPORT_HEADER.map(|header| header.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    push_line(&mut out, EXPORT_HEADER.iter().copied(), &widths);
    for row in &rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

pub fn save_outcome(outcome: SaveOutcome) -> String {
    match outcome {
        SaveOutcome::Added(id) => format!("Contact {id} added."),
        SaveOutcome::Incomplete { field } => format!("Not saved: `{field}` is empty."),
        SaveOutcome::DuplicateName => "Not saved: a contact with that name already exists.".to_string(),
    }
}

pub fn update_outcome(id: i64, outcome: UpdateOutcome) -> String {
    match outcome {
        UpdateOutcome::Updated { changed: 0 } => format!("No contact with id {id}."),
        UpdateOutcome::Updated { .. } => format!("Contact {id} updated."),
        UpdateOutcome::Incomplete { field } => format!("Not updated: `{field}` is empty."),
    }
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize; 5]) {
    let mut line = String::new();
    for (index, (cell, width)) in cells.zip(widths).enumerate() {
        if index > 0 {
            line.push_str(COLUMN_GAP);
        }
        line.push_str(cell);
        line.push_str(&" ".repeat(width.saturating_sub(cell.width())));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::{contacts_table, save_outcome, update_outcome};
    use contacts_core::{Contact, SaveOutcome, UpdateOutcome};

    #[test]
    fn table_aligns_columns_to_widest_cell() {
        let contacts = vec![Contact {
            id: 12,
            name: "Ana Maria".to_string(),
            age: "30".to_string(),
            email: "a@x.com".to_string(),
            phone: "123456789".to_string(),
        }];

        let rendered = contacts_table(&contacts);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "ID  NAME       AGE  EMAIL    PHONE");
        assert_eq!(lines[1], "12  Ana Maria  30   a@x.com  123456789");
    }

    #[test]
    fn empty_list_renders_header_only() {
        assert_eq!(contacts_table(&[]), "ID  NAME  AGE  EMAIL  PHONE\n");
    }

    #[test]
    fn outcomes_have_readable_messages() {
        assert_eq!(save_outcome(SaveOutcome::Added(3)), "Contact 3 added.");
        assert!(save_outcome(SaveOutcome::DuplicateName).contains("already exists"));
        assert_eq!(
            update_outcome(9, UpdateOutcome::Updated { changed: 0 }),
            "No contact with id 9."
        );
    }
}
