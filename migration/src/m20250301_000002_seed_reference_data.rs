use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_catalog_tables::{Genre, Language};

const GENRES: &[&str] = &[
    "Action",
    "Animation",
    "Comedy",
    "Documentary",
    "Drama",
    "Horror",
    "Romance",
    "Science Fiction",
    "Thriller",
];

const LANGUAGES: &[&str] = &["English", "French", "German", "Japanese", "Portuguese", "Spanish"];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut genres = Query::insert();
        genres.into_table(Genre::Table).columns([Genre::Name]);
        for name in GENRES {
            genres.values_panic([(*name).into()]);
        }
        manager.exec_stmt(genres).await?;

        let mut languages = Query::insert();
        languages.into_table(Language::Table).columns([Language::Name]);
        for name in LANGUAGES {
            languages.values_panic([(*name).into()]);
        }
        manager.exec_stmt(languages).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Genre::Table)
                    .and_where(Expr::col(Genre::Name).is_in(GENRES.iter().copied()))
                    .to_owned(),
            )
            .await?;

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Language::Table)
                    .and_where(Expr::col(Language::Name).is_in(LANGUAGES.iter().copied()))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
