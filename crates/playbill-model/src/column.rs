//! Required input columns.
//!
//! The attendance log is kept with Czech column headings. Each variant maps
//! one required heading to the record field it feeds.

use std::fmt;

/// A required column of the attendance log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    /// Performance date (`Datum`). Free-form, required.
    Date,
    /// Title of the production (`Nazev`). Required.
    Title,
    /// Ensemble or company (`Soubor`).
    Theatre,
    /// Venue (`Misto`).
    Place,
    /// City (`Mesto`).
    City,
    /// Guest performance flag (`Hostovacka`).
    GuestPerformance,
    /// Withdrawn-from-repertoire flag (`StazenoZR`).
    WithdrawnFromRepertoire,
    /// Genre list (`Zanry`).
    Genres,
    /// Rating, nominally 0-100 (`Hodnoceni`).
    Rating,
    /// Free-text comment (`Komentar`).
    Comment,
}

impl Column {
    /// Every required column, in output field order.
    pub const ALL: [Column; 10] = [
        Column::Date,
        Column::Title,
        Column::Theatre,
        Column::Place,
        Column::City,
        Column::GuestPerformance,
        Column::WithdrawnFromRepertoire,
        Column::Genres,
        Column::Rating,
        Column::Comment,
    ];

    /// Returns the heading as it appears in the CSV header row.
    pub fn header_name(&self) -> &'static str {
        match self {
            Column::Date => "Datum",
            Column::Title => "Nazev",
            Column::Theatre => "Soubor",
            Column::Place => "Misto",
            Column::City => "Mesto",
            Column::GuestPerformance => "Hostovacka",
            Column::WithdrawnFromRepertoire => "StazenoZR",
            Column::Genres => "Zanry",
            Column::Rating => "Hodnoceni",
            Column::Comment => "Komentar",
        }
    }

    /// Returns a short English description of the column.
    pub fn description(&self) -> &'static str {
        match self {
            Column::Date => "Performance date",
            Column::Title => "Production title",
            Column::Theatre => "Ensemble / company",
            Column::Place => "Venue",
            Column::City => "City",
            Column::GuestPerformance => "Guest performance (boolean)",
            Column::WithdrawnFromRepertoire => "Withdrawn from repertoire (boolean)",
            Column::Genres => "Genres, separated by ; | or ,",
            Column::Rating => "Rating, nominally 0-100, optional %",
            Column::Comment => "Comment",
        }
    }

    /// Returns the JSON field name the column populates.
    pub fn field_name(&self) -> &'static str {
        match self {
            Column::Date => "date",
            Column::Title => "title",
            Column::Theatre => "theatre",
            Column::Place => "place",
            Column::City => "city",
            Column::GuestPerformance => "host",
            Column::WithdrawnFromRepertoire => "removed",
            Column::Genres => "genres",
            Column::Rating => "rating",
            Column::Comment => "comment",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header_name())
    }
}
