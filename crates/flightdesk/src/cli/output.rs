//! Plain-text rendering of reservations.

use std::fmt::Write as _;

use crate::reservation::{Field, Reservation};

/// Render reservations as an aligned table with a header row.
///
/// Columns follow the booking form: id first, then the six fields.
#[must_use]
pub fn render_table(reservations: &[Reservation]) -> String {
    let mut header: Vec<String> = vec!["ID".to_string()];
    header.extend(Field::ALL.iter().map(|field| field.label().to_string()));

    let rows: Vec<Vec<String>> = reservations
        .iter()
        .map(|reservation| {
            let mut row = vec![reservation.id.to_string()];
            row.extend(
                Field::ALL
                    .iter()
                    .map(|field| reservation.booking.get(*field).to_string()),
            );
            row
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|cell| cell.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in std::iter::once(&header).chain(&rows) {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::Booking;

    fn reservation(id: i64, full_name: &str) -> Reservation {
        Reservation {
            id,
            booking: Booking {
                full_name: full_name.to_string(),
                flight_number: "MS777".to_string(),
                departure: "Cairo".to_string(),
                destination: "New York".to_string(),
                date: "5/16/25".to_string(),
                seat_number: "12A".to_string(),
            },
        }
    }

    #[test]
    fn test_render_empty_has_header_only() {
        let table = render_table(&[]);
        assert_eq!(table.lines().count(), 1);
        assert!(table.starts_with("ID  Full Name  Flight Number"));
    }

    #[test]
    fn test_render_rows_in_given_order() {
        let table = render_table(&[reservation(1, "Ann Lee"), reservation(3, "Bob")]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1   Ann Lee"));
        assert!(lines[2].starts_with("3   Bob"));
        assert!(lines[1].contains("New York"));
    }

    #[test]
    fn test_render_columns_aligned() {
        let table = render_table(&[reservation(1, "A Much Longer Name"), reservation(2, "Bo")]);
        let lines: Vec<&str> = table.lines().collect();
        let column = lines[0].find("Flight Number").unwrap();
        assert_eq!(lines[1].find("MS777"), Some(column));
        assert_eq!(lines[2].find("MS777"), Some(column));
    }
}
