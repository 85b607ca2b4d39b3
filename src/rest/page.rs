//! Pagination query parameters and link-relation metadata.
//!
//! The backend paginates list responses with two headers: `X-Total-Count`
//! (total matching rows, independent of what is loaded locally) and `Link`
//! (RFC 8288 relations pointing at the first/prev/next/last pages). Each
//! relation URL carries a `page` query parameter; that number is all the
//! client needs, so [`PageLinks`] stores just the extracted indices.

use url::Url;

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Sort field and direction, rendered as `field,asc` on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn render(&self) -> String {
        format!("{},{}", self.field, self.direction.as_str())
    }
}

/// Parameters for a list fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct PageQuery {
    /// Zero-based page index.
    pub page: u64,
    /// Page size; must be positive.
    pub size: u64,
    pub sort: Option<SortSpec>,
}

impl PageQuery {
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page,
            size,
            sort: None,
        }
    }

    pub fn sorted(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(SortSpec::new(field, direction));
        self
    }

    /// First page with no sort, as issued by the implicit post-mutation refresh.
    pub fn first(size: u64) -> Self {
        Self::new(0, size)
    }
}

/// Page indices extracted from the `Link` response header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageLinks {
    pub first: Option<u64>,
    pub prev: Option<u64>,
    pub next: Option<u64>,
    pub last: Option<u64>,
}

impl PageLinks {
    /// Whether pages beyond `current_page` exist, per the server's `last` bound.
    pub fn has_next(&self, current_page: u64) -> bool {
        self.last.is_some_and(|last| current_page < last)
    }

    /// Parse a `Link` header value of the form
    /// `<url?page=1&size=20>; rel="next",<url?page=4&size=20>; rel="last"`.
    ///
    /// Unknown relations and malformed segments are skipped rather than
    /// rejected: a missing link only means the relation is unavailable.
    pub fn parse(header: &str) -> Self {
        let mut links = Self::default();
        for segment in header.split(',') {
            let Some((url_part, rel_part)) = segment.split_once(';') else {
                continue;
            };
            let url_part = url_part.trim().trim_start_matches('<').trim_end_matches('>');
            let Some(page) = page_param(url_part) else {
                continue;
            };
            let rel = rel_part
                .trim()
                .trim_start_matches("rel=")
                .trim_matches('"');
            match rel {
                "first" => links.first = Some(page),
                "prev" => links.prev = Some(page),
                "next" => links.next = Some(page),
                "last" => links.last = Some(page),
                _ => {}
            }
        }
        links
    }
}

/// Extract the `page` query parameter from a relation URL.
///
/// Relation URLs may be absolute or relative; relative ones are resolved
/// against a placeholder base just for parsing.
fn page_param(raw: &str) -> Option<u64> {
    let url = Url::parse(raw)
        .or_else(|_| Url::parse("http://localhost").and_then(|base| base.join(raw)))
        .ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}

/// One page of list results with its response metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// `X-Total-Count` value; `None` when the header was absent or unreadable.
    pub total_count: Option<u64>,
    pub links: PageLinks,
}
