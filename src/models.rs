use anyhow::Context;
use jiff::{Timestamp, civil::Date, tz::TimeZone};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::{genre, language, movie};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct CreateMovieRequest {
    #[schema(example = "Inception")]
    pub title: String,
    #[schema(example = 1)]
    pub genre_id: i32,
    #[schema(example = 1)]
    pub language_id: i32,
    #[schema(example = 4)]
    pub oscar_count: Option<i32>,
    /// Calendar date or RFC 3339 timestamp.
    #[schema(example = "2010-07-16")]
    pub release_date: String,
}

/// Every field is optional; absent fields keep their stored value.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateMovieRequest {
    pub title: Option<String>,
    pub genre_id: Option<i32>,
    pub language_id: Option<i32>,
    pub oscar_count: Option<i32>,
    pub release_date: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub genre_id: i32,
    pub language_id: i32,
    pub oscar_count: i32,
    pub release_date: Date,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MovieChanges {
    pub title: Option<String>,
    pub genre_id: Option<i32>,
    pub language_id: Option<i32>,
    pub oscar_count: Option<i32>,
    pub release_date: Option<Date>,
}

impl CreateMovieRequest {
    pub fn into_new_movie(self) -> anyhow::Result<NewMovie> {
        Ok(NewMovie {
            release_date: parse_release_date(&self.release_date)?,
            title: self.title,
            genre_id: self.genre_id,
            language_id: self.language_id,
            oscar_count: self.oscar_count.unwrap_or(0),
        })
    }
}

impl UpdateMovieRequest {
    pub fn into_changes(self) -> anyhow::Result<MovieChanges> {
        let release_date = self.release_date.as_deref().map(parse_release_date).transpose()?;

        Ok(MovieChanges {
            title: self.title,
            genre_id: self.genre_id,
            language_id: self.language_id,
            oscar_count: self.oscar_count,
            release_date,
        })
    }
}

/// Accepts `2010-07-16`, `2010-07-16T10:00:00` or an RFC 3339 timestamp.
/// Timestamps are reduced to their UTC calendar date.
pub fn parse_release_date(input: &str) -> anyhow::Result<Date> {
    let input = input.trim();

    if let Ok(ts) = input.parse::<Timestamp>() {
        return Ok(ts.to_zoned(TimeZone::UTC).date());
    }
    if let Ok(date) = input.parse::<Date>() {
        return Ok(date);
    }

    let datetime: jiff::civil::DateTime =
        input.parse().with_context(|| format!("invalid release_date {input:?}"))?;
    Ok(datetime.date())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenreView {
    pub id: i32,
    #[schema(example = "Comedy")]
    pub name: String,
}

impl From<genre::Model> for GenreView {
    fn from(model: genre::Model) -> Self {
        Self { id: model.id, name: model.name }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LanguageView {
    pub id: i32,
    #[schema(example = "English")]
    pub name: String,
}

impl From<language::Model> for LanguageView {
    fn from(model: language::Model) -> Self {
        Self { id: model.id, name: model.name }
    }
}

/// A movie with its genre and language expanded inline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MovieView {
    pub id: i32,
    pub title: String,
    pub genre_id: i32,
    pub language_id: i32,
    pub oscar_count: i32,
    #[schema(value_type = String, format = Date, example = "2010-07-16")]
    pub release_date: Date,
    pub genre: GenreView,
    pub language: LanguageView,
}

impl MovieView {
    pub fn new(
        movie: movie::Model,
        genre: genre::Model,
        language: language::Model,
    ) -> anyhow::Result<Self> {
        let release_date = movie
            .release_date
            .parse()
            .with_context(|| format!("stored release_date of movie {}", movie.id))?;

        Ok(Self {
            id: movie.id,
            title: movie.title,
            genre_id: movie.genre_id,
            language_id: movie.language_id,
            oscar_count: movie.oscar_count,
            release_date,
            genre: genre.into(),
            language: language.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn parses_plain_calendar_date() {
        assert_eq!(parse_release_date("2010-07-16").unwrap(), date(2010, 7, 16));
    }

    #[test]
    fn parses_utc_timestamp_like_javascript_iso_strings() {
        assert_eq!(parse_release_date("2010-07-16T00:00:00.000Z").unwrap(), date(2010, 7, 16));
    }

    #[test]
    fn timestamp_with_offset_uses_utc_date() {
        assert_eq!(parse_release_date("2010-07-16T22:30:00-05:00").unwrap(), date(2010, 7, 17));
    }

    #[test]
    fn parses_civil_datetime() {
        assert_eq!(parse_release_date("1994-09-23T12:00:00").unwrap(), date(1994, 9, 23));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(parse_release_date(" 2001-12-19 ").unwrap(), date(2001, 12, 19));
    }

    #[test]
    fn rejects_garbage_and_impossible_dates() {
        assert!(parse_release_date("").is_err());
        assert!(parse_release_date("16/07/2010").is_err());
        assert!(parse_release_date("2010-02-30").is_err());
    }

    #[test]
    fn create_request_defaults_oscar_count_to_zero() {
        let req: CreateMovieRequest = serde_json::from_value(serde_json::json!({
            "title": "Amélie",
            "genre_id": 3,
            "language_id": 2,
            "release_date": "2001-04-25"
        }))
        .unwrap();

        let movie = req.into_new_movie().unwrap();
        assert_eq!(movie.oscar_count, 0);
        assert_eq!(movie.release_date, date(2001, 4, 25));
    }

    #[test]
    fn update_request_leaves_absent_fields_unset() {
        let req: UpdateMovieRequest =
            serde_json::from_value(serde_json::json!({ "oscar_count": 2 })).unwrap();

        let changes = req.into_changes().unwrap();
        assert_eq!(changes, MovieChanges { oscar_count: Some(2), ..Default::default() });
    }

    #[test]
    fn update_request_with_bad_date_fails() {
        let req = UpdateMovieRequest {
            release_date: Some("next tuesday".to_string()),
            ..Default::default()
        };
        assert!(req.into_changes().is_err());
    }

    #[test]
    fn movie_view_serializes_date_as_iso_string() {
        let view = MovieView::new(
            movie::Model {
                id: 7,
                title: "Inception".to_string(),
                genre_id: 1,
                language_id: 1,
                oscar_count: 4,
                release_date: "2010-07-16".to_string(),
            },
            genre::Model { id: 1, name: "Action".to_string() },
            language::Model { id: 1, name: "English".to_string() },
        )
        .unwrap();

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["release_date"], "2010-07-16");
        assert_eq!(json["genre"]["name"], "Action");
        assert_eq!(json["language"]["id"], 1);
    }
}
