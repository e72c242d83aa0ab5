use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::info;

use super::core::{Handler, RequestContext, ResponseSink};
use crate::router::Router;

/// A frozen router that can be replaced while requests are being served.
///
/// Readers load the current snapshot without locking; a request that
/// started on the old snapshot finishes on it. Pair with a reused
/// [`Builder`](crate::router::Builder) to rebuild the table and swap it in.
pub struct SharedRouter<H> {
    current: ArcSwap<Router<H>>,
}

impl<H> SharedRouter<H> {
    #[must_use]
    pub fn new(router: Router<H>) -> Self {
        Self {
            current: ArcSwap::from_pointee(router),
        }
    }

    /// The snapshot currently serving requests.
    #[must_use]
    pub fn load(&self) -> Arc<Router<H>> {
        self.current.load_full()
    }

    /// Install `router` and return the snapshot it replaced.
    pub fn replace(&self, router: Router<H>) -> Arc<Router<H>> {
        let routes_count = router.route_count();
        let previous = self.current.swap(Arc::new(router));
        info!(
            routes_count,
            previous_routes_count = previous.route_count(),
            "Routing table swapped"
        );
        previous
    }
}

impl<Req, Res> SharedRouter<Handler<Req, Res>>
where
    Req: RequestContext,
    Res: ResponseSink,
{
    /// Serve `req` against the current snapshot.
    pub fn serve(&self, res: &mut Res, req: &Req) {
        self.current.load().serve(res, req);
    }
}
