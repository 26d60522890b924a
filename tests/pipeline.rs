//! End-to-end pipeline tests over fixture pages.
//!
//! Each fixture mimics the markup shape of one production site. A stub
//! fetcher serves them by URL so the full fetch → extract → aggregate path
//! runs without touching the network.

use cinerank::{
    Fetch, FetchError, Pipeline, PipelineOptions, Rankings, ScrapeError, SourceId,
};
use std::collections::HashMap;

const IMDB_URL: &str = "https://www.imdb.com/chart/top";
const RANKER_URL: &str = "https://www.ranker.com/crowdranked-list/the-best-movies-of-all-time";
const EMPIRE_URL: &str = "https://www.empireonline.com/movies/features/best-movies/";

const IMDB_PAGE: &str = r#"
<html><body><table>
  <tr><td class="titleColumn">
      1.
      <a href="/title/tt0111161/">The Shawshank Redemption</a>
      <span class="secondaryInfo">(1994)</span>
  </td></tr>
  <tr><td class="titleColumn">
      2.
      <a href="/title/tt0068646/">The Godfather</a>
      <span class="secondaryInfo">(1972)</span>
  </td></tr>
  <tr><td class="titleColumn">
      3.
      <a href="/title/tt0076759/">Star Wars: Episode IV — A New Hope</a>
      <span class="secondaryInfo">(1977)</span>
  </td></tr>
</table></body></html>
"#;

const RANKER_PAGE: &str = r#"
<html><head>
  <meta itemprop="name" content="The Best Movies of All Time" />
  <meta itemprop="name" content="Movies" />
  <meta itemprop="position" content="1" />
  <meta itemprop="name" content="The Shawshank Redemption (1994)" />
  <meta itemprop="position" content="2" />
  <meta itemprop="name" content="Star Wars" />
  <meta itemprop="position" content="3" />
  <meta itemprop="name" content="The Godfather (1972)" />
</head></html>
"#;

const EMPIRE_PAGE: &str = r#"
<html><body>
  <h2>1. The Godfather (1972)</h2>
  <h2>2. Star Wars: Episode IV — A New Hope (1977)</h2>
  <h2>3. The Shawshank Redemption (1994)</h2>
  <h2>4. Seven (1995)</h2>
</body></html>
"#;

struct StubFetcher {
    pages: HashMap<&'static str, &'static str>,
}

impl StubFetcher {
    fn all_sources() -> Self {
        StubFetcher {
            pages: HashMap::from([
                (IMDB_URL, IMDB_PAGE),
                (RANKER_URL, RANKER_PAGE),
                (EMPIRE_URL, EMPIRE_PAGE),
            ]),
        }
    }
}

impl Fetch for StubFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.pages
            .get(url)
            .map(|page| page.to_string())
            .ok_or_else(|| FetchError {
                url: url.to_string(),
                status: Some(503),
                message: "stub: service unavailable".to_string(),
            })
    }
}

fn entry<'a>(rankings: &'a Rankings, key: &str) -> Option<&'a cinerank::ConsensusEntry> {
    rankings.by_rank_sum.iter().find(|e| e.key == key)
}

#[test]
fn complete_run_reconciles_titles_across_sites() {
    let pipeline = Pipeline::new(StubFetcher::all_sources(), PipelineOptions::default());
    let rankings = pipeline.run().unwrap();

    // Se7en appears only on Empire, so complete filtering drops it.
    assert_eq!(rankings.by_rank_sum.len(), 3);
    assert!(entry(&rankings, "se7en").is_none());

    // Ranker's bare "Star Wars" alias lands in the same group as the other
    // two sites' full title.
    let star_wars = entry(&rankings, "star wars episode iv a new hope").unwrap();
    assert_eq!(star_wars.source_count, 3);
    assert_eq!(star_wars.rank_sum, 3 + 2 + 2);

    let shawshank = entry(&rankings, "the shawshank redemption").unwrap();
    assert_eq!(shawshank.rank_sum, 1 + 1 + 3);

    let godfather = entry(&rankings, "the godfather").unwrap();
    assert_eq!(godfather.rank_sum, 2 + 3 + 1);

    // Sum view sorts ascending: shawshank (5) then godfather (6) then
    // star wars (7).
    let titles: Vec<&str> = rankings
        .by_rank_sum
        .iter()
        .map(|e| e.key.as_str())
        .collect();
    assert_eq!(
        titles,
        vec![
            "the shawshank redemption",
            "the godfather",
            "star wars episode iv a new hope"
        ]
    );
}

#[test]
fn include_partial_keeps_single_source_movies() {
    let mut options = PipelineOptions::default();
    options.require_complete = false;
    let pipeline = Pipeline::new(StubFetcher::all_sources(), options);
    let rankings = pipeline.run().unwrap();

    let se7en = entry(&rankings, "se7en").unwrap();
    assert_eq!(se7en.source_count, 1);
    assert_eq!(se7en.rank_sum, 4);
    assert_eq!(se7en.rank_mean, 4.0);
}

#[test]
fn dead_source_degrades_instead_of_aborting() {
    // Only Empire resolves; the other two fetches fail.
    let fetcher = StubFetcher {
        pages: HashMap::from([(EMPIRE_URL, EMPIRE_PAGE)]),
    };

    let mut options = PipelineOptions::default();
    options.require_complete = false;
    let rankings = Pipeline::new(fetcher, options).run().unwrap();
    assert_eq!(rankings.by_rank_sum.len(), 4);
    assert!(rankings.by_rank_sum.iter().all(|e| e.source_count == 1));

    // With the default complete filter the same run is empty: the filter
    // counts configured sources, not successful ones.
    let fetcher = StubFetcher {
        pages: HashMap::from([(EMPIRE_URL, EMPIRE_PAGE)]),
    };
    let rankings = Pipeline::new(fetcher, PipelineOptions::default())
        .run()
        .unwrap();
    assert!(rankings.is_empty());
}

#[test]
fn malformed_page_is_contained() {
    // Ranker serves a page whose position stream is garbage; its extractor
    // fails, the other sources still aggregate.
    let fetcher = StubFetcher {
        pages: HashMap::from([
            (IMDB_URL, IMDB_PAGE),
            (RANKER_URL, r#"<meta itemprop="position" content="one" />"#),
            (EMPIRE_URL, EMPIRE_PAGE),
        ]),
    };
    let mut options = PipelineOptions::default();
    options.require_complete = false;
    let rankings = Pipeline::new(fetcher, options).run().unwrap();

    let shawshank = entry(&rankings, "the shawshank redemption").unwrap();
    assert_eq!(shawshank.source_count, 2);
}

#[test]
fn parallel_run_matches_sequential() {
    let pipeline = Pipeline::new(StubFetcher::all_sources(), PipelineOptions::default());
    assert_eq!(pipeline.run().unwrap(), pipeline.run_parallel().unwrap());
}

#[test]
fn top_n_truncation_applies_to_both_views() {
    let mut options = PipelineOptions::default();
    options.require_complete = false;
    options.top_n = 2;
    let rankings = Pipeline::new(StubFetcher::all_sources(), options)
        .run()
        .unwrap();
    assert_eq!(rankings.by_rank_sum.len(), 2);
    assert_eq!(rankings.by_rank_mean.len(), 2);
}

#[test]
fn empty_source_list_is_the_only_fatal_case() {
    let options = PipelineOptions {
        sources: vec![],
        require_complete: true,
        top_n: 10,
    };
    let err = Pipeline::new(StubFetcher::all_sources(), options)
        .run()
        .unwrap_err();
    assert!(matches!(err, ScrapeError::NoSources));
}

#[test]
fn source_dispatch_by_host() {
    assert_eq!(SourceId::for_url(IMDB_URL), Some(SourceId::Imdb));
    assert_eq!(SourceId::for_url(RANKER_URL), Some(SourceId::Ranker));
    assert_eq!(SourceId::for_url(EMPIRE_URL), Some(SourceId::Empire));
    assert_eq!(SourceId::for_url("https://letterboxd.com/top"), None);
}
