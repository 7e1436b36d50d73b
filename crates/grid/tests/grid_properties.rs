use calsheet_grid::{
    build_grid, days_in_month, CalendarGrid, Cell, CellRef, HighlightKind, Locale, GRID_COLUMNS,
    GRID_ROWS,
};
use chrono::{Datelike, NaiveDate, Weekday};

fn grid(year: i32) -> CalendarGrid {
    let _ = env_logger::builder().is_test(true).try_init();
    build_grid(year, &Locale::english()).expect("year should be supported")
}

/// Month length counted by walking dates, independent of the builder.
fn true_month_length(year: i32, month: u32) -> usize {
    NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap()
        .iter_days()
        .take_while(|d| d.month() == month)
        .count()
}

#[test]
fn every_year_has_a_full_rectangular_grid() {
    for year in (1583..=2400).step_by(7) {
        let g = grid(year);
        assert_eq!(g.rows().len(), GRID_ROWS, "year {year}");
        assert!(g.rows().iter().all(|row| row.len() == GRID_COLUMNS), "year {year}");
    }
}

#[test]
fn non_empty_cells_match_month_lengths() {
    for year in [1900, 2000, 2023, 2024, 2100] {
        let g = grid(year);
        for month0 in 0..12 {
            let expected = true_month_length(year, month0 as u32 + 1);
            assert_eq!(g.non_empty_count(month0), expected, "{year}-{}", month0 + 1);
            assert_eq!(
                days_in_month(year, month0 as u32 + 1).unwrap() as usize,
                expected
            );
        }
    }
}

#[test]
fn day_numbers_run_from_one_without_gaps_then_only_padding() {
    let g = grid(2026);
    for month0 in 0..12 {
        let column: Vec<&Cell> = g.column(month0).collect();
        let days: Vec<u32> = column.iter().map_while(|c| c.day_of_month()).collect();
        assert_eq!(days, (1..=days.len() as u32).collect::<Vec<_>>());
        assert!(column[days.len()..].iter().all(|c| **c == Cell::Empty));

        let length = true_month_length(2026, month0 as u32 + 1) as u32;
        assert!(column.iter().filter_map(|c| c.day_of_month()).all(|d| d <= length));
    }
}

#[test]
fn weekday_tags_match_the_calendar() {
    let g = grid(1999);
    for month0 in 0..12 {
        for cell in g.column(month0) {
            if let (Some(day), Some(weekday)) = (cell.day_of_month(), cell.weekday()) {
                let date = NaiveDate::from_ymd_opt(1999, month0 as u32 + 1, day).unwrap();
                assert_eq!(date.weekday(), weekday);
            }
        }
    }
}

#[test]
fn building_is_idempotent() {
    assert_eq!(grid(2031), grid(2031));
}

#[test]
fn leap_year_february() {
    assert_eq!(grid(2024).non_empty_count(1), 29);
    assert_eq!(grid(2023).non_empty_count(1), 28);
}

#[test]
fn january_first_2024_is_a_monday() {
    let g = grid(2024);
    assert_eq!(g.cell(CellRef::new(0, 1)).unwrap().text(), "1  Mo");
    assert_eq!(g.non_empty_count(0), 31);
    assert_eq!(g.non_empty_count(3), 30);
}

#[test]
fn saturday_cells_are_highlighted_and_never_empty() {
    let g = grid(2024);
    let h = g.highlights();
    for (row, cells) in g.rows().iter().enumerate() {
        for (column, cell) in cells.iter().enumerate() {
            let at = CellRef::new(column, row);
            if cell.weekday() == Some(Weekday::Sat) {
                assert!(cell.text().ends_with("Sa"));
                assert!(h.saturday().contains(&at));
                assert!(!h.empty().contains(&at));
                assert_eq!(h.fill_for(at), Some(HighlightKind::Saturday));
            }
        }
    }
    // 2024 has 52 Saturdays and 52 Sundays.
    assert_eq!(h.saturday().len(), 52);
    assert_eq!(h.sunday().len(), 52);
}

#[test]
fn highlight_sets_are_disjoint_and_in_bounds() {
    let g = grid(2025);
    let h = g.highlights();
    let all = [HighlightKind::Empty, HighlightKind::Saturday, HighlightKind::Sunday];
    for kind in all {
        for at in h.cells(kind) {
            assert!(at.column < GRID_COLUMNS && at.row < GRID_ROWS, "{at:?}");
        }
    }
    assert!(h.saturday().is_disjoint(h.sunday()));
    assert!(h.empty().is_disjoint(h.saturday()));
    assert!(h.empty().is_disjoint(h.sunday()));
    // 365 days over 372 day slots leaves 7 padding cells.
    assert_eq!(h.empty().len(), 12 * 31 - 365);
}

#[test]
fn header_row_is_never_highlighted_with_an_english_locale() {
    let g = grid(2024);
    let h = g.highlights();
    for column in 0..GRID_COLUMNS {
        assert_eq!(h.fill_for(CellRef::new(column, 0)), None);
    }
}

#[test]
fn locale_changes_labels_but_not_structure() {
    let de = build_grid(2024, &Locale::by_code("de").unwrap()).unwrap();
    let en = grid(2024);
    assert_eq!(de.month_names()[2], "März");
    assert_eq!(de.cell(CellRef::new(0, 7)).unwrap().text(), "7  So");
    assert_eq!(de.highlights(), en.highlights());
}
