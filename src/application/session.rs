//! Reader Session - 阅读会话
//!
//! Navigator 在出版物关闭时发布 `NavigatorEvent::Exited`，
//! 会话订阅并把退出坐标落盘；书签用例同样由会话编排。

use std::sync::Arc;

use tokio::sync::broadcast;
use uuid::Uuid;

use crate::domain::reading::{Bookmark, Progression, Publication, ReadingPosition};

use super::error::ApplicationError;
use super::ports::{BookmarkRepository, Navigator};
use super::position_store::ReadingPositionStore;

/// Navigator 事件
///
/// `Exited` 在出版物关闭时发出，携带当前文档下标与文档内进度。
#[derive(Debug, Clone, PartialEq)]
pub enum NavigatorEvent {
    Exited {
        document_index: usize,
        progression: Option<Progression>,
    },
}

/// 阅读会话
///
/// 一个会话对应一本打开的出版物。
pub struct ReaderSession {
    publication: Publication,
    positions: ReadingPositionStore,
    bookmarks: Arc<dyn BookmarkRepository>,
}

impl ReaderSession {
    pub fn new(
        publication: Publication,
        positions: ReadingPositionStore,
        bookmarks: Arc<dyn BookmarkRepository>,
    ) -> Self {
        Self {
            publication,
            positions,
            bookmarks,
        }
    }

    pub fn publication(&self) -> &Publication {
        &self.publication
    }

    /// 打开出版物时的初始导航目标
    ///
    /// 出版物没有标识时不查存储，直接从头开始。
    pub async fn initial_position(&self) -> ReadingPosition {
        match self.publication.identifier() {
            Some(id) => self.positions.load(id).await,
            None => {
                tracing::debug!("publication has no identifier, starting from beginning");
                ReadingPosition::start()
            }
        }
    }

    /// 处理单个 Navigator 事件
    pub async fn handle_event(&self, event: NavigatorEvent) {
        match event {
            NavigatorEvent::Exited {
                document_index,
                progression,
            } => {
                let Some(id) = self.publication.identifier() else {
                    // 无标识则不持久化，静默跳过
                    tracing::debug!("publication has no identifier, exit position not persisted");
                    return;
                };
                let position = ReadingPosition::new(document_index, progression);
                self.positions.save(id, &position).await;
            }
        }
    }

    /// 消费事件订阅直到通道关闭
    pub async fn run(&self, mut events: broadcast::Receiver<NavigatorEvent>) {
        loop {
            match events.recv().await {
                Ok(event) => self.handle_event(event).await,
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "navigator event subscription lagged");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }

    /// 从 Navigator 当前位置构造书签
    ///
    /// 标识缺失、位置不可用或 href 不在阅读顺序内时返回 None。
    pub fn current_bookmark(&self, navigator: &dyn Navigator) -> Option<Bookmark> {
        let publication_id = self.publication.identifier()?.clone();
        let locator = navigator.current_location()?;
        let resource_index = self.publication.resource_index_for_href(&locator.href)?;
        Some(Bookmark::new(publication_id, resource_index, locator))
    }

    /// 保存书签
    pub async fn add_bookmark(&self, bookmark: &Bookmark) -> Result<(), ApplicationError> {
        self.bookmarks.save(bookmark).await?;
        tracing::info!(
            bookmark_id = %bookmark.id,
            publication_id = %bookmark.publication_id,
            resource_index = bookmark.resource_index,
            "bookmark added"
        );
        Ok(())
    }

    /// 当前出版物的全部书签；出版物无标识时为空
    pub async fn bookmarks(&self) -> Result<Vec<Bookmark>, ApplicationError> {
        match self.publication.identifier() {
            Some(id) => Ok(self.bookmarks.find_by_publication(id).await?),
            None => Ok(Vec::new()),
        }
    }

    /// 删除书签
    pub async fn remove_bookmark(&self, id: Uuid) -> Result<(), ApplicationError> {
        if self.bookmarks.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("bookmark", id));
        }
        self.bookmarks.delete(id).await?;
        Ok(())
    }

    /// 跳转到书签位置
    pub fn go_to_bookmark(&self, bookmark: &Bookmark, navigator: &dyn Navigator) {
        navigator.display_item(bookmark.resource_index, bookmark.locator.progression);
    }

    /// 按 href 跳转（目录项等场景）
    pub fn go_to_href(&self, href: &str, navigator: &dyn Navigator) -> bool {
        navigator.display_item_with_href(href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::RepositoryError;
    use crate::domain::reading::{Locator, PublicationId, PublicationMetadata, ReadingOrderItem};
    use crate::infrastructure::adapters::FakeNavigator;
    use crate::infrastructure::memory::InMemoryPreferenceStore;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MemoryBookmarks {
        entries: Mutex<Vec<Bookmark>>,
    }

    impl MemoryBookmarks {
        fn new() -> Self {
            Self {
                entries: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl BookmarkRepository for MemoryBookmarks {
        async fn save(&self, bookmark: &Bookmark) -> Result<(), RepositoryError> {
            self.entries.lock().unwrap().push(bookmark.clone());
            Ok(())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<Bookmark>, RepositoryError> {
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .find(|b| b.id == id)
                .cloned())
        }

        async fn find_by_publication(
            &self,
            publication_id: &PublicationId,
        ) -> Result<Vec<Bookmark>, RepositoryError> {
            Ok(self
                .entries
                .lock()
                .unwrap()
                .iter()
                .filter(|b| &b.publication_id == publication_id)
                .cloned()
                .collect())
        }

        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
            self.entries.lock().unwrap().retain(|b| b.id != id);
            Ok(())
        }
    }

    fn publication(identifier: Option<&str>) -> Publication {
        Publication::new(
            PublicationMetadata {
                identifier: identifier.map(|i| PublicationId::new(i).unwrap()),
                title: Some("Test Book".into()),
            },
            vec![
                ReadingOrderItem::new("cover.xhtml"),
                ReadingOrderItem::new("chapter-1.xhtml"),
                ReadingOrderItem::new("chapter-2.xhtml"),
            ],
        )
    }

    fn session(identifier: Option<&str>) -> (ReaderSession, Arc<InMemoryPreferenceStore>) {
        let preferences = Arc::new(InMemoryPreferenceStore::new());
        let session = ReaderSession::new(
            publication(identifier),
            ReadingPositionStore::new(preferences.clone()),
            Arc::new(MemoryBookmarks::new()),
        );
        (session, preferences)
    }

    #[tokio::test]
    async fn test_exit_event_persists_position() {
        let (session, _) = session(Some("book-42"));

        session
            .handle_event(NavigatorEvent::Exited {
                document_index: 3,
                progression: Some(Progression::new(0.57).unwrap()),
            })
            .await;

        let restored = session.initial_position().await;
        assert_eq!(restored.document_index, 3);
        assert_eq!(restored.progression, Some(Progression::new(0.57).unwrap()));
    }

    #[tokio::test]
    async fn test_exit_without_identifier_is_skipped() {
        let (session, preferences) = session(None);

        session
            .handle_event(NavigatorEvent::Exited {
                document_index: 2,
                progression: None,
            })
            .await;

        assert!(preferences.is_empty());
        assert_eq!(session.initial_position().await, ReadingPosition::start());
    }

    #[tokio::test]
    async fn test_run_consumes_events_until_closed() {
        let (session, _) = session(Some("book-run"));
        let (tx, rx) = broadcast::channel(8);

        tx.send(NavigatorEvent::Exited {
            document_index: 1,
            progression: None,
        })
        .unwrap();
        tx.send(NavigatorEvent::Exited {
            document_index: 2,
            progression: Some(Progression::new(0.25).unwrap()),
        })
        .unwrap();
        drop(tx);

        session.run(rx).await;

        let restored = session.initial_position().await;
        assert_eq!(restored.document_index, 2);
        assert_eq!(restored.progression, Some(Progression::new(0.25).unwrap()));
    }

    #[tokio::test]
    async fn test_current_bookmark_resolves_spine_index() {
        let (session, _) = session(Some("book-bm"));
        let navigator = FakeNavigator::new().with_location(Locator::new(
            "chapter-2.xhtml",
            Some(Progression::new(0.4).unwrap()),
        ));

        let bookmark = session.current_bookmark(&navigator).unwrap();
        assert_eq!(bookmark.resource_index, 2);
        assert_eq!(bookmark.locator.href, "chapter-2.xhtml");
    }

    #[tokio::test]
    async fn test_current_bookmark_requires_identifier_and_location() {
        let (anonymous, _) = session(None);
        let navigator = FakeNavigator::new()
            .with_location(Locator::new("chapter-1.xhtml", None));
        assert!(anonymous.current_bookmark(&navigator).is_none());

        let (session, _) = session(Some("book-bm"));
        let idle = FakeNavigator::new();
        assert!(session.current_bookmark(&idle).is_none());

        let stray = FakeNavigator::new().with_location(Locator::new("not-in-spine.xhtml", None));
        assert!(session.current_bookmark(&stray).is_none());
    }

    #[tokio::test]
    async fn test_bookmark_lifecycle() {
        let (session, _) = session(Some("book-bm"));
        let navigator = FakeNavigator::new().with_location(Locator::new(
            "chapter-1.xhtml",
            Some(Progression::new(0.8).unwrap()),
        ));

        let bookmark = session.current_bookmark(&navigator).unwrap();
        session.add_bookmark(&bookmark).await.unwrap();
        assert_eq!(session.bookmarks().await.unwrap().len(), 1);

        session.remove_bookmark(bookmark.id).await.unwrap();
        assert!(session.bookmarks().await.unwrap().is_empty());

        // 再删一次: NotFound
        assert!(matches!(
            session.remove_bookmark(bookmark.id).await,
            Err(ApplicationError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_go_to_bookmark_displays_item() {
        let (session, _) = session(Some("book-bm"));
        let navigator = FakeNavigator::new();
        let bookmark = Bookmark::new(
            PublicationId::new("book-bm").unwrap(),
            2,
            Locator::new("chapter-2.xhtml", Some(Progression::new(0.4).unwrap())),
        );

        session.go_to_bookmark(&bookmark, &navigator);

        let displayed = navigator.displayed();
        assert_eq!(displayed.len(), 1);
        assert_eq!(displayed[0], (2, Some(Progression::new(0.4).unwrap())));
    }
}
