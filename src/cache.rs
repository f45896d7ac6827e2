// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Lazily populated renderer handles keyed by output format.
//!
//! The cache starts empty, builds at most one renderer per format on first
//! use and never evicts. Lookup and creation happen under a single lock, so
//! concurrent first use of the same format observes one shared handle.

use std::{collections::HashMap, fmt, sync::Arc};

use parking_lot::Mutex;
use tracing::debug;

use crate::{
    error::Error,
    format::OutputFormat,
    render::{EngineRendererFactory, Renderer, RendererFactory},
};

/// Shared map from output format to its renderer.
pub struct RendererCache
{
    factory:   Arc<dyn RendererFactory,>,
    renderers: Mutex<HashMap<OutputFormat, Arc<dyn Renderer,>,>,>,
}

impl RendererCache
{
    /// Creates an empty cache that builds renderers with `factory`.
    pub fn new<F,>(factory: F,) -> Self
    where
        F: RendererFactory + 'static,
    {
        Self {
            factory:   Arc::new(factory,),
            renderers: Mutex::new(HashMap::with_capacity(OutputFormat::ALL.len(),),),
        }
    }

    /// Returns the renderer for `format`, building it on first use.
    pub fn get_or_create(&self, format: OutputFormat,) -> Arc<dyn Renderer,>
    {
        let mut renderers = self.renderers.lock();
        let renderer = renderers.entry(format,).or_insert_with(|| {
            debug!("creating {format} renderer");
            self.factory.create(format,)
        },);
        Arc::clone(renderer,)
    }

    /// Resolves a raw format token and returns its renderer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFormat`] for a blank token and
    /// [`Error::UnknownFormat`] for an unsupported one; nothing is created in
    /// either case.
    pub fn resolve(&self, format: &str,) -> Result<(OutputFormat, Arc<dyn Renderer,>,), Error,>
    {
        let format = OutputFormat::resolve(format,)?;
        Ok((format, self.get_or_create(format,),),)
    }

    /// Returns `true` when a renderer for `format` has been built.
    pub fn contains(&self, format: OutputFormat,) -> bool
    {
        self.renderers.lock().contains_key(&format,)
    }

    /// Number of renderers built so far.
    pub fn len(&self,) -> usize
    {
        self.renderers.lock().len()
    }

    /// Returns `true` before the first renderer is built.
    pub fn is_empty(&self,) -> bool
    {
        self.len() == 0
    }
}

impl Default for RendererCache
{
    fn default() -> Self
    {
        Self::new(EngineRendererFactory,)
    }
}

impl fmt::Debug for RendererCache
{
    fn fmt(&self, f: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        let mut formats: Vec<OutputFormat,> = self.renderers.lock().keys().copied().collect();
        formats.sort_by_key(|format| format.as_str(),);
        f.debug_struct("RendererCache",).field("renderers", &formats,).finish()
    }
}

#[cfg(test)]
mod tests
{
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        thread,
    };

    use super::*;
    use crate::render::SvgRenderer;

    struct CountingFactory
    {
        created: Arc<AtomicUsize,>,
    }

    impl RendererFactory for CountingFactory
    {
        fn create(&self, format: OutputFormat,) -> Arc<dyn Renderer,>
        {
            self.created.fetch_add(1, Ordering::SeqCst,);
            EngineRendererFactory.create(format,)
        }
    }

    fn counting_cache() -> (RendererCache, Arc<AtomicUsize,>,)
    {
        let created = Arc::new(AtomicUsize::new(0,),);
        let cache = RendererCache::new(CountingFactory {
            created: Arc::clone(&created,),
        },);
        (cache, created,)
    }

    #[test]
    fn starts_empty()
    {
        let cache = RendererCache::default();
        assert!(cache.is_empty());
        assert!(!cache.contains(OutputFormat::Svg));
    }

    #[test]
    fn reuses_the_same_handle()
    {
        let (cache, created,) = counting_cache();

        let first = cache.get_or_create(OutputFormat::Png,);
        let second = cache.get_or_create(OutputFormat::Png,);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(created.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn builds_one_handle_per_format()
    {
        let (cache, created,) = counting_cache();
        for _ in 0..3 {
            for format in OutputFormat::ALL {
                assert_eq!(cache.get_or_create(format,).format(), format);
            }
        }
        assert_eq!(created.load(Ordering::SeqCst), 4);
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn resolve_rejects_bad_tokens_without_creating()
    {
        let (cache, created,) = counting_cache();

        assert!(matches!(cache.resolve(""), Err(Error::MissingFormat)));
        assert!(matches!(cache.resolve("bmp"), Err(Error::UnknownFormat { .. })));
        assert_eq!(created.load(Ordering::SeqCst), 0);

        let (format, _renderer,) = cache.resolve("HTML",).unwrap();
        assert_eq!(format, OutputFormat::Html);
        assert!(cache.contains(OutputFormat::Html));
    }

    #[test]
    fn concurrent_first_use_creates_a_single_handle()
    {
        let (cache, created,) = counting_cache();
        let cache = Arc::new(cache,);

        let handles: Vec<_,> = (0..16)
            .map(|_| {
                let cache = Arc::clone(&cache,);
                thread::spawn(move || cache.get_or_create(OutputFormat::Svg,),)
            },)
            .collect();
        let renderers: Vec<Arc<dyn Renderer,>,> =
            handles.into_iter().map(|handle| handle.join().expect("thread panicked",),).collect();

        assert_eq!(created.load(Ordering::SeqCst), 1);
        assert!(renderers.windows(2,).all(|pair| Arc::ptr_eq(&pair[0], &pair[1],)));
    }

    #[test]
    fn accepts_closure_factories()
    {
        let cache = RendererCache::new(|_format: OutputFormat| -> Arc<dyn Renderer,> {
            Arc::new(SvgRenderer,)
        },);
        assert_eq!(cache.get_or_create(OutputFormat::Jpg,).format(), OutputFormat::Svg);
    }

    #[test]
    fn debug_lists_cached_formats()
    {
        let cache = RendererCache::default();
        cache.get_or_create(OutputFormat::Jpg,);
        assert_eq!(format!("{cache:?}"), "RendererCache { renderers: [Jpg] }");
    }
}
