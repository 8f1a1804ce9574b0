use anyhow::Context;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, LoaderTrait, NotSet, QueryFilter,
    QueryOrder, Set, SqlErr, Unchanged,
    sea_query::{Expr, Func, IntoColumnRef, SimpleExpr},
};

use crate::{
    entities::{genre, language, movie},
    error::AppResult,
    models::{GenreView, LanguageView, MovieChanges, MovieView, NewMovie},
};

/// Every query the HTTP handlers run against the movie tables.
#[derive(Clone)]
pub struct MovieCatalog {
    db: DatabaseConnection,
}

impl MovieCatalog {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn list_movies(&self) -> AppResult<Vec<MovieView>> {
        let movies = movie::Entity::find()
            .order_by_asc(movie::Column::Title)
            .all(&self.db)
            .await?;

        self.expand(movies).await
    }

    pub async fn movies_by_genre(&self, genre_name: &str) -> AppResult<Vec<MovieView>> {
        let movies = movie::Entity::find()
            .inner_join(genre::Entity)
            .filter(lower_eq((genre::Entity, genre::Column::Name), genre_name))
            .order_by_asc(movie::Column::Title)
            .all(&self.db)
            .await?;

        self.expand(movies).await
    }

    pub async fn find_by_title(&self, title: &str) -> AppResult<Option<movie::Model>> {
        let found = movie::Entity::find()
            .filter(lower_eq((movie::Entity, movie::Column::Title), title))
            .one(&self.db)
            .await?;
        Ok(found)
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Returns the id assigned by the database, or `None` when the unique
    /// title index rejects the row.
    pub async fn create(&self, new: NewMovie) -> AppResult<Option<i32>> {
        let model = movie::ActiveModel {
            id: NotSet,
            title: Set(new.title),
            genre_id: Set(new.genre_id),
            language_id: Set(new.language_id),
            oscar_count: Set(new.oscar_count),
            release_date: Set(new.release_date.to_string()),
        };

        match movie::Entity::insert(model).exec(&self.db).await {
            Ok(res) => Ok(Some(res.last_insert_id)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(None)
            },
            Err(err) => Err(err.into()),
        }
    }

    pub async fn update(&self, id: i32, changes: MovieChanges) -> AppResult<()> {
        let mut model = movie::ActiveModel { id: Unchanged(id), ..Default::default() };

        if let Some(title) = changes.title {
            model.title = Set(title);
        }
        if let Some(genre_id) = changes.genre_id {
            model.genre_id = Set(genre_id);
        }
        if let Some(language_id) = changes.language_id {
            model.language_id = Set(language_id);
        }
        if let Some(oscar_count) = changes.oscar_count {
            model.oscar_count = Set(oscar_count);
        }
        if let Some(release_date) = changes.release_date {
            model.release_date = Set(release_date.to_string());
        }

        if !model.is_changed() {
            return Ok(());
        }

        movie::Entity::update(model).exec(&self.db).await?;
        Ok(())
    }

    /// Returns the number of rows removed.
    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected)
    }

    pub async fn list_genres(&self) -> AppResult<Vec<GenreView>> {
        let genres = genre::Entity::find()
            .order_by_asc(genre::Column::Name)
            .all(&self.db)
            .await?;
        Ok(genres.into_iter().map(GenreView::from).collect())
    }

    pub async fn list_languages(&self) -> AppResult<Vec<LanguageView>> {
        let languages = language::Entity::find()
            .order_by_asc(language::Column::Name)
            .all(&self.db)
            .await?;
        Ok(languages.into_iter().map(LanguageView::from).collect())
    }

    async fn expand(&self, movies: Vec<movie::Model>) -> AppResult<Vec<MovieView>> {
        let genres = movies.load_one(genre::Entity, &self.db).await?;
        let languages = movies.load_one(language::Entity, &self.db).await?;

        let views = movies
            .into_iter()
            .zip(genres)
            .zip(languages)
            .map(|((movie, genre), language)| {
                let genre = genre.with_context(|| {
                    format!("movie {} references missing genre {}", movie.id, movie.genre_id)
                })?;
                let language = language.with_context(|| {
                    format!("movie {} references missing language {}", movie.id, movie.language_id)
                })?;
                MovieView::new(movie, genre, language)
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(views)
    }
}

/// `lower(column) = lower(input)`. Both sides go through the database's own
/// `lower()`, so they fold identically on every backend.
fn lower_eq(column: impl IntoColumnRef, value: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column))).eq(Func::lower(Expr::val(value)))
}
