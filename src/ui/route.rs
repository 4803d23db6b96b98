//! Route table for the application pages

/// The pages the application can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Landing page
    #[default]
    Home,
    /// Movie and TV search
    Search,
    /// Details for a single movie
    MovieDetails(u64),
    /// Details for a single TV show
    TvDetails(u64),
    /// Catch-all for unknown paths
    NotFound,
}

impl Route {
    /// Parse a URL-style path into a route.
    ///
    /// Unknown paths map to [`Route::NotFound`]; parsing never fails.
    /// Query strings and fragments are ignored.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["search"] => Route::Search,
            ["movie", id] => match id.parse::<u64>() {
                Ok(id) => Route::MovieDetails(id),
                Err(_) => Route::NotFound,
            },
            ["tv", id] => match id.parse::<u64>() {
                Ok(id) => Route::TvDetails(id),
                Err(_) => Route::NotFound,
            },
            _ => Route::NotFound,
        }
    }

    /// Human-readable page name, used by the header and logs
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Search => "Search",
            Route::MovieDetails(_) => "Movie Details",
            Route::TvDetails(_) => "TV Show Details",
            Route::NotFound => "Not Found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_paths_map_to_home() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
    }

    #[test]
    fn search_path_maps_to_search() {
        assert_eq!(Route::parse("/search"), Route::Search);
        assert_eq!(Route::parse("search"), Route::Search);
        assert_eq!(Route::parse("/search/"), Route::Search);
    }

    #[test]
    fn detail_paths_carry_their_id() {
        assert_eq!(Route::parse("/movie/603"), Route::MovieDetails(603));
        assert_eq!(Route::parse("/tv/1399"), Route::TvDetails(1399));
    }

    #[test]
    fn non_numeric_ids_are_not_found() {
        assert_eq!(Route::parse("/movie/matrix"), Route::NotFound);
        assert_eq!(Route::parse("/tv/-1"), Route::NotFound);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/settings"), Route::NotFound);
        assert_eq!(Route::parse("/movie"), Route::NotFound);
        assert_eq!(Route::parse("/movie/603/cast"), Route::NotFound);
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        assert_eq!(Route::parse("/search?q=alien"), Route::Search);
        assert_eq!(Route::parse("/movie/603#top"), Route::MovieDetails(603));
    }

    #[test]
    fn default_route_is_home() {
        assert_eq!(Route::default(), Route::Home);
    }
}
