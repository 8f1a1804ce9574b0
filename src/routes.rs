use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::{debug, info};

use crate::{
    AppState,
    error::{AppError, AppResult, ResultExt},
    models::{
        CreateMovieRequest, ErrorMessage, GenreView, LanguageView, MovieView, UpdateMovieRequest,
    },
};

pub const FETCH_FAILED: &str = "Falha ao buscar filme";
pub const DUPLICATE_TITLE: &str = "Já existe um filme cadastrado com este título";
pub const CREATE_FAILED: &str = "Houve um erro ao cadastrar o filme";
pub const MOVIE_NOT_FOUND: &str = "Filme não encontrado";
pub const UPDATE_FAILED: &str = "Falha ao atualizar o filme";
pub const DELETE_FAILED: &str = "Falha ao remover o registro";
pub const GENRES_FAILED: &str = "Falha ao buscar gêneros";
pub const LANGUAGES_FAILED: &str = "Falha ao buscar idiomas";

#[utoipa::path(
    get,
    path = "/movies",
    tag = "movies",
    responses(
        (status = 200, description = "Every movie, ordered by title", body = Vec<MovieView>),
        (status = 500, description = "Database failure, empty body")
    )
)]
pub async fn list_movies(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<MovieView>>> {
    let movies = state.catalog.list_movies().await?;
    debug!(count = movies.len(), "listed movies");
    Ok(Json(movies))
}

#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = String, Path, description = "Genre name, matched case-insensitively. PUT and DELETE read the same segment as a movie id")),
    responses(
        (status = 200, description = "Movies of that genre, ordered by title", body = Vec<MovieView>),
        (status = 500, description = "Database failure", body = ErrorMessage)
    )
)]
pub async fn movies_by_genre(
    State(state): State<Arc<AppState>>,
    Path(genre): Path<String>,
) -> AppResult<Json<Vec<MovieView>>> {
    let movies = state.catalog.movies_by_genre(&genre).await.or_internal(FETCH_FAILED)?;
    debug!(genre = %genre, count = movies.len(), "filtered movies by genre");
    Ok(Json(movies))
}

#[utoipa::path(
    post,
    path = "/movies",
    tag = "movies",
    request_body = CreateMovieRequest,
    responses(
        (status = 201, description = "Movie created"),
        (status = 409, description = "A movie with this title already exists", body = ErrorMessage),
        (status = 500, description = "Database failure or unparsable release_date", body = ErrorMessage)
    )
)]
pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateMovieRequest>,
) -> AppResult<StatusCode> {
    let existing = state.catalog.find_by_title(&req.title).await.or_internal(CREATE_FAILED)?;
    if let Some(existing) = existing {
        debug!(title = %req.title, existing_id = existing.id, "duplicate title");
        return Err(AppError::Conflict(DUPLICATE_TITLE));
    }

    let movie = req.into_new_movie().or_internal(CREATE_FAILED)?;
    let title = movie.title.clone();
    let Some(id) = state.catalog.create(movie).await.or_internal(CREATE_FAILED)? else {
        debug!(title = %title, "title claimed by a concurrent create");
        return Err(AppError::Conflict(DUPLICATE_TITLE));
    };

    info!(id, title = %title, "movie created");
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    put,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = i32, Path, description = "Movie id")),
    request_body = UpdateMovieRequest,
    responses(
        (status = 200, description = "Movie updated"),
        (status = 404, description = "No movie with this id", body = ErrorMessage),
        (status = 500, description = "Database failure or unparsable release_date", body = ErrorMessage)
    )
)]
pub async fn update_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(req): Json<UpdateMovieRequest>,
) -> AppResult<StatusCode> {
    if state.catalog.find_by_id(id).await.or_internal(UPDATE_FAILED)?.is_none() {
        return Err(AppError::NotFound(MOVIE_NOT_FOUND));
    }

    let changes = req.into_changes().or_internal(UPDATE_FAILED)?;
    state.catalog.update(id, changes).await.or_internal(UPDATE_FAILED)?;

    info!(id, "movie updated");
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = i32, Path, description = "Movie id")),
    responses(
        (status = 200, description = "Movie removed"),
        (status = 404, description = "No movie with this id", body = ErrorMessage),
        (status = 500, description = "Database failure", body = ErrorMessage)
    )
)]
pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    if state.catalog.find_by_id(id).await.or_internal(DELETE_FAILED)?.is_none() {
        return Err(AppError::NotFound(MOVIE_NOT_FOUND));
    }

    let removed = state.catalog.delete(id).await.or_internal(DELETE_FAILED)?;

    info!(id, removed, "movie deleted");
    Ok(StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/genres",
    tag = "reference",
    responses(
        (status = 200, description = "Every genre, ordered by name", body = Vec<GenreView>),
        (status = 500, description = "Database failure", body = ErrorMessage)
    )
)]
pub async fn list_genres(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<GenreView>>> {
    Ok(Json(state.catalog.list_genres().await.or_internal(GENRES_FAILED)?))
}

#[utoipa::path(
    get,
    path = "/languages",
    tag = "reference",
    responses(
        (status = 200, description = "Every language, ordered by name", body = Vec<LanguageView>),
        (status = 500, description = "Database failure", body = ErrorMessage)
    )
)]
pub async fn list_languages(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<LanguageView>>> {
    Ok(Json(state.catalog.list_languages().await.or_internal(LANGUAGES_FAILED)?))
}
