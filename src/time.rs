use chrono::{NaiveDate, ParseResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
  chrono::Local::now().date_naive()
}

pub fn parse_date(date: &str) -> ParseResult<NaiveDate> {
  return NaiveDate::parse_from_str(date.trim(), DATE_FORMAT);
}

pub fn format_date(date: NaiveDate) -> String {
  date.format(DATE_FORMAT).to_string()
}
