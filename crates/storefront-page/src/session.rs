//! A mounted product page and its background recommendation fetch.
//!
//! The fetch task only holds a weak reference to the page. Dropping the
//! [`MountedPage`] aborts the task, and a fetch that completes after the page
//! is gone has nowhere to write.

use std::sync::{Arc, Weak};

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::composer::ProductPage;
use crate::error::PageError;
use crate::source::RecommendationSource;
use crate::tracker::VisitorTracker;
use crate::view::ProductPageView;

pub struct MountedPage {
    page: Arc<Mutex<ProductPage>>,
    fetch: Option<JoinHandle<()>>,
}

impl MountedPage {
    /// Mounts `page` and starts its one recommendation fetch in the background.
    ///
    /// The SKU is captured here, from the variant selected at mount time.
    /// Must be called from within a tokio runtime.
    pub fn mount<T, S>(mut page: ProductPage, tracker: T, source: Arc<S>) -> Self
    where
        T: VisitorTracker + 'static,
        S: RecommendationSource + 'static,
    {
        let sku = page.begin_recommendations();
        let page = Arc::new(Mutex::new(page));

        let fetch = sku.map(|sku| {
            tokio::spawn(load_recommendations(
                Arc::downgrade(&page),
                sku,
                tracker,
                source,
            ))
        });

        Self { page, fetch }
    }

    /// # Errors
    ///
    /// Returns [`PageError::UnknownVariant`] if the product has no such SKU.
    pub async fn select_variant(&self, sku: &str) -> Result<(), PageError> {
        self.page.lock().await.select_variant(sku)
    }

    pub async fn view(&self) -> ProductPageView {
        self.page.lock().await.view()
    }

    /// Waits for the background fetch to finish.
    ///
    /// Never returns if the tracker never loads.
    pub async fn settled(&mut self) {
        if let Some(handle) = self.fetch.take() {
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "recommendation task failed");
            }
        }
    }
}

impl Drop for MountedPage {
    fn drop(&mut self) {
        if let Some(handle) = self.fetch.take() {
            handle.abort();
        }
    }
}

async fn load_recommendations<T, S>(
    page: Weak<Mutex<ProductPage>>,
    sku: String,
    tracker: T,
    source: Arc<S>,
) where
    T: VisitorTracker,
    S: RecommendationSource,
{
    tracker.wait_until_loaded().await;

    let Some(visitor_id) = tracker.visitor_id() else {
        tracing::debug!(sku = %sku, "tracker loaded without a visitor id; skipping");
        return;
    };

    let outcome = source.recommend(&sku, &visitor_id).await;

    let Some(page) = page.upgrade() else {
        tracing::debug!(sku = %sku, "page unmounted before recommendations arrived");
        return;
    };
    page.lock().await.finish_recommendations(outcome);
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;
    use std::time::Duration;

    use rust_decimal::Decimal;
    use serde_json::json;
    use storefront_core::{Locale, Product, RecommendedProductSummary, SummaryPrice};

    use super::*;
    use crate::composer::RequestState;
    use crate::tracker::ChannelTracker;

    #[derive(Default)]
    struct RecordingSource {
        calls: AtomicUsize,
        skus: StdMutex<Vec<String>>,
        fail: bool,
    }

    impl RecommendationSource for RecordingSource {
        async fn recommend(
            &self,
            sku: &str,
            _visitor_id: &str,
        ) -> Result<Vec<RecommendedProductSummary>, PageError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.skus.lock().expect("lock").push(sku.to_owned());
            if self.fail {
                return Err(PageError::NoResults { status: 500 });
            }
            Ok(vec![RecommendedProductSummary {
                id: "rec-1".to_owned(),
                name: "Linen Cushion".to_owned(),
                item_type: "product".to_owned(),
                path: "/shop/textiles/linen-cushion".to_owned(),
                images: vec![],
                price: SummaryPrice {
                    price: Decimal::from(39),
                    currency: "USD".to_owned(),
                },
            }])
        }
    }

    fn page() -> ProductPage {
        let product: Product = serde_json::from_value(json!({
            "path": "/shop/chairs/oak",
            "name": "Oak Chair",
            "variants": [
                { "sku": "oak-natural", "isDefault": true },
                { "sku": "oak-smoked" }
            ]
        }))
        .expect("product fixture");
        ProductPage::new(product, Locale::default()).expect("page should mount")
    }

    #[tokio::test]
    async fn loaded_tracker_fetches_once_for_default_variant() {
        let source = Arc::new(RecordingSource::default());
        let mut mounted =
            MountedPage::mount(page(), ChannelTracker::loaded("visitor-1"), Arc::clone(&source));

        mounted.settled().await;

        let view = mounted.view().await;
        assert_eq!(view.recommended.map(|s| s.count), Some(1));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(*source.skus.lock().unwrap(), vec!["oak-natural".to_owned()]);
    }

    #[tokio::test]
    async fn variant_change_before_load_keeps_initial_sku_and_single_fetch() {
        let source = Arc::new(RecordingSource::default());
        let tracker = ChannelTracker::new();
        let mut mounted = MountedPage::mount(page(), tracker.clone(), Arc::clone(&source));

        mounted
            .select_variant("oak-smoked")
            .await
            .expect("variant exists");
        tracker.mark_loaded("visitor-1");
        mounted.settled().await;

        mounted
            .select_variant("oak-natural")
            .await
            .expect("variant exists");

        let view = mounted.view().await;
        assert_eq!(view.selected_variant.sku, "oak-natural");
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(*source.skus.lock().unwrap(), vec!["oak-natural".to_owned()]);
    }

    #[tokio::test]
    async fn unloaded_tracker_never_fetches() {
        let source = Arc::new(RecordingSource::default());
        let mounted = MountedPage::mount(page(), ChannelTracker::new(), Arc::clone(&source));

        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
        let guard = mounted.page.lock().await;
        assert!(matches!(guard.recommendations(), RequestState::Loading));
        drop(guard);
        assert!(mounted.view().await.recommended.is_none());
    }

    #[tokio::test]
    async fn unmount_cancels_pending_fetch() {
        let source = Arc::new(RecordingSource::default());
        let tracker = ChannelTracker::new();
        let mounted = MountedPage::mount(page(), tracker.clone(), Arc::clone(&source));

        drop(mounted);
        tracker.mark_loaded("visitor-1");
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn failed_fetch_renders_without_recommendations() {
        let source = Arc::new(RecordingSource {
            fail: true,
            ..RecordingSource::default()
        });
        let mut mounted =
            MountedPage::mount(page(), ChannelTracker::loaded("visitor-1"), Arc::clone(&source));

        mounted.settled().await;

        let guard = mounted.page.lock().await;
        assert!(matches!(guard.recommendations(), RequestState::Failed(_)));
        drop(guard);
        assert!(mounted.view().await.recommended.is_none());
    }
}
