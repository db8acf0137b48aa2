use crate::core::fetcher::SourceFetcher;
use crate::core::parser::EntryParser;
use crate::core::render::render;
use crate::core::{ConfigProvider, ExtractResult, Pipeline, RenderedBlocklist, Storage};
use crate::domain::model::SourceFailure;
use crate::utils::error::Result;

pub struct BlocklistPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    fetcher: SourceFetcher,
    parser: EntryParser,
}

impl<S: Storage, C: ConfigProvider> BlocklistPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Result<Self> {
        Ok(Self {
            storage,
            config,
            fetcher: SourceFetcher::new()?,
            parser: EntryParser::new()?,
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for BlocklistPipeline<S, C> {
    async fn extract(&self) -> Result<ExtractResult> {
        let mut result = ExtractResult::default();
        let timeout = self.config.request_timeout();

        // 依設定順序逐一抓取，單一來源失敗只記錄不中斷
        for source in self.config.sources() {
            tracing::info!("Fetching blocklist from {}...", source);

            match self.fetcher.fetch(source, timeout).await {
                Ok(body) => {
                    let before = result.entries.len();
                    let matched = self.parser.parse_into(&body, &mut result.entries);
                    tracing::debug!(
                        "{}: {} entries matched, {} new",
                        source,
                        matched,
                        result.entries.len() - before
                    );
                    result.succeeded.push(source.clone());
                }
                Err(e) => {
                    tracing::error!("Error fetching {}: {}", source, e);
                    result.failed.push(SourceFailure {
                        url: source.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        Ok(result)
    }

    async fn transform(&self, data: ExtractResult) -> Result<RenderedBlocklist> {
        Ok(render(
            &data.entries,
            chrono::Utc::now(),
            self.config.cidr_first(),
        ))
    }

    async fn load(&self, result: RenderedBlocklist) -> Result<String> {
        let output_file = self.config.output_file();

        tracing::debug!(
            "Writing {} entries ({} bytes) to {}",
            result.total_entries,
            result.content.len(),
            output_file
        );
        self.storage
            .write_file(output_file, result.content.as_bytes())
            .await?;

        Ok(output_file.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::BlocklistConfig;
    use httpmock::prelude::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn config_for(sources: Vec<String>) -> BlocklistConfig {
        BlocklistConfig {
            sources,
            output_file: "blocklist.conf".to_string(),
            request_timeout: Some(5),
            cidr_first: None,
        }
    }

    #[tokio::test]
    async fn test_extract_deduplicates_across_sources() {
        let server = MockServer::start();
        let first = server.mock(|when, then| {
            when.method(GET).path("/a.txt");
            then.status(200).body("# list a\n10.0.0.1\n2.2.2.2\n");
        });
        let second = server.mock(|when, then| {
            when.method(GET).path("/b.txt");
            then.status(200).body("; list b\n10.0.0.1 ; dup\n192.168.0.0/16\n");
        });

        let config = config_for(vec![server.url("/a.txt"), server.url("/b.txt")]);
        let pipeline = BlocklistPipeline::new(MockStorage::default(), config).unwrap();

        let result = pipeline.extract().await.unwrap();

        first.assert();
        second.assert();
        assert_eq!(result.entries.len(), 3);
        assert_eq!(result.succeeded.len(), 2);
        assert!(result.failed.is_empty());
    }

    #[tokio::test]
    async fn test_failed_source_does_not_abort_extract() {
        let server = MockServer::start();
        let broken = server.mock(|when, then| {
            when.method(GET).path("/broken.txt");
            then.status(503);
        });
        let healthy = server.mock(|when, then| {
            when.method(GET).path("/ok.txt");
            then.status(200).body("5.6.7.8\n");
        });

        let broken_url = server.url("/broken.txt");
        let config = config_for(vec![broken_url.clone(), server.url("/ok.txt")]);
        let pipeline = BlocklistPipeline::new(MockStorage::default(), config).unwrap();

        let result = pipeline.extract().await.unwrap();

        broken.assert();
        healthy.assert();
        assert!(result.entries.contains("5.6.7.8"));
        assert_eq!(result.failed.len(), 1);
        assert_eq!(result.failed[0].url, broken_url);
    }

    #[tokio::test]
    async fn test_slow_source_times_out_and_run_continues() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/slow.txt");
            then.status(200)
                .delay(Duration::from_secs(3))
                .body("66.66.66.66\n");
        });
        let healthy = server.mock(|when, then| {
            when.method(GET).path("/ok.txt");
            then.status(200).body("7.7.7.0/24\n7.7.7.7\n");
        });

        let slow_url = server.url("/slow.txt");
        let mut config = config_for(vec![slow_url.clone(), server.url("/ok.txt")]);
        config.request_timeout = Some(1);
        let pipeline = BlocklistPipeline::new(MockStorage::default(), config).unwrap();

        let result = pipeline.extract().await.unwrap();

        healthy.assert();
        assert_eq!(result.failed.len(), 1);
        assert_eq!(result.failed[0].url, slow_url);
        assert!(!result.entries.contains("66.66.66.66"));
        assert!(result.entries.contains("7.7.7.0/24"));
        assert!(result.entries.contains("7.7.7.7"));
        assert_eq!(result.succeeded, vec![server.url("/ok.txt")]);
    }

    #[tokio::test]
    async fn test_load_writes_rendered_content_to_output_file() {
        let storage = MockStorage::default();
        let pipeline = BlocklistPipeline::new(storage.clone(), config_for(vec![])).unwrap();

        let mut data = ExtractResult::default();
        data.entries.extend(["2.2.2.2", "10.0.0.0/8"]);

        let rendered = pipeline.transform(data).await.unwrap();
        let path = pipeline.load(rendered).await.unwrap();

        assert_eq!(path, "blocklist.conf");
        let written = String::from_utf8(storage.get_file("blocklist.conf").await.unwrap()).unwrap();
        assert!(written.contains("# Total unique IPs: 2\n"));
        assert!(written.ends_with("default 0;\n10.0.0.0/8 1;\n2.2.2.2 1;\n"));
    }
}
