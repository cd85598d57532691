//! Reading pivot tables from CSV files and writing the results back

#![cfg(feature = "csv")]

use std::fs;

use tidycells::prelude::*;
use tidycells::read_csv_set;

const SCORES: &str = ",Female,,Male,\n\
                      ,matilda,jason,ulysses,felicity\n\
                      history,2,8,7,4\n\
                      geography,9,1,3,5\n";

#[test]
fn test_csv_to_wide_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scores.csv");
    let output = dir.path().join("by_subject.csv");
    fs::write(&input, SCORES).unwrap();

    let tidy = read_csv_set(&input)
        .unwrap()
        .behead(Direction::NNW, "sex")
        .unwrap()
        .behead(Direction::N, "name")
        .unwrap()
        .behead(Direction::W, "subject")
        .unwrap();

    // One row per student, one column per subject
    let per_student: Vec<Record> = tidy
        .into_iter()
        .map(|r| {
            Record::new(Cell::new(1, r.position().col, r.value().clone()).unwrap())
                .with_field("sex", r.field("sex").cloned())
                .with_field("name", r.field("name").cloned())
                .with_field("subject", r.field("subject").cloned())
        })
        .collect();
    let wide = spatter(&per_student, "subject").unwrap();
    CsvWriter::write_wide_file(&wide, &output, &CsvWriteOptions::default()).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "sex,name,history,geography\n\
         Female,matilda,2,9\n\
         Female,jason,8,1\n\
         Male,ulysses,7,3\n\
         Male,felicity,4,5\n"
    );
}

#[test]
fn test_header_row_stays_text() {
    let text = ",2019,2020\nwheat,1,2\n";
    let cells = CsvReader::read(text.as_bytes(), &CsvReadOptions::default()).unwrap();

    let tidy = CellSet::new(cells)
        .unwrap()
        .behead(Direction::N, "year")
        .unwrap()
        .behead(Direction::W, "crop")
        .unwrap();

    let years: Vec<DataType> = tidy
        .iter()
        .filter_map(|r| r.field("year").map(CellValue::data_type))
        .collect();
    assert_eq!(years, vec![DataType::Character, DataType::Character]);

    // As text, years are usable as column names
    let wide = spatter(tidy.records(), "year").unwrap();
    assert_eq!(wide.key_columns(), &["2019".to_string(), "2020".to_string()]);
}
