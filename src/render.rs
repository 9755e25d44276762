use crate::models::{Credit, MovieDetails, MovieSummary, Scalar};
use crate::page::{DetailPanel, ListView, Row};

/// Placeholder for an empty credit list.
pub const NO_DATA: &str = "brak danych";

/// Replace `list` with one clickable row per movie, or a single placeholder
/// row carrying `empty_message` when there are none.
pub fn render_movie_list(list: &mut ListView, movies: &[MovieSummary], empty_message: &str) {
    list.clear();
    if movies.is_empty() {
        list.push(Row::plain(empty_message));
        return;
    }
    for movie in movies {
        list.push(Row::link(movie_row_text(movie), movie.id.clone()));
    }
}

/// `title [(year)] [ocena: rating]`
pub fn movie_row_text(movie: &MovieSummary) -> String {
    let mut parts = vec![movie.title.clone().unwrap_or_default()];
    if let Some(year) = year_text(&movie.year) {
        parts.push(format!("({year})"));
    }
    if let Some(rating) = rating_text(&movie.rating) {
        parts.push(format!("ocena: {rating}"));
    }
    parts.join(" ")
}

/// Fill the movie card, or hide it when there is nothing to show.
pub fn render_movie_details(panel: &mut DetailPanel, details: Option<&MovieDetails>) {
    let Some((details, movie)) = details.and_then(|d| d.movie.as_ref().map(|m| (d, m))) else {
        panel.visible = false;
        return;
    };

    panel.title = movie.title.clone().unwrap_or_default();

    let mut subtitle = Vec::new();
    if let Some(year) = year_text(&movie.year) {
        subtitle.push(format!("Rok: {year}"));
    }
    if let Some(rating) = rating_text(&movie.rating) {
        subtitle.push(format!("Ocena: {rating}"));
    }
    panel.subtitle = subtitle.join(" | ");

    fill_credits(&mut panel.actors, details.actors.as_deref());
    fill_credits(&mut panel.directors, details.directors.as_deref());
    fill_credits(&mut panel.genres, details.genres.as_deref());

    panel.visible = true;
}

fn fill_credits(list: &mut ListView, credits: Option<&[Credit]>) {
    list.clear();
    match credits {
        Some(credits) if !credits.is_empty() => {
            for credit in credits {
                list.push(Row::plain(credit.display_name()));
            }
        }
        _ => list.push(Row::plain(NO_DATA)),
    }
}

fn year_text(year: &Option<Scalar>) -> Option<String> {
    year.as_ref().and_then(Scalar::text)
}

fn rating_text(rating: &Option<Scalar>) -> Option<String> {
    rating.as_ref().and_then(Scalar::text)
}
