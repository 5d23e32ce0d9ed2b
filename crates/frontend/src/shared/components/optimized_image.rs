use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::shared::site_config::SITE;

/// Картинка с ленивой загрузкой: реальный `src` подставляется только когда
/// контейнер приближается к видимой области. Битая или отсутствующая ссылка
/// заменяется заглушкой.
#[component]
pub fn OptimizedImage(
    src: Option<String>,
    #[prop(into)] alt: String,
) -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let (in_view, set_in_view) = signal(false);
    let (loaded, set_loaded) = signal(false);
    let (errored, set_errored) = signal(false);

    Effect::new(move |_| {
        let Some(element) = container.get() else {
            return;
        };
        // Начинаем грузить за 100px до появления на экране
        let callback = Closure::<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>::new(
            move |entries: Vec<IntersectionObserverEntry>, observer: IntersectionObserver| {
                for entry in entries {
                    if entry.is_intersecting() {
                        set_in_view.set(true);
                        observer.disconnect();
                    }
                }
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_root_margin("100px");
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(0.01));
        match IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => {
                observer.observe(&element);
                callback.forget();
            }
            Err(_) => {
                // Старый браузер без IntersectionObserver: грузим сразу
                set_in_view.set(true);
            }
        }
    });

    let effective_src = move || {
        let src = src.clone().filter(|s| !s.is_empty());
        match src {
            Some(url) if !errored.get() => url,
            _ => SITE.catalog.no_photo_placeholder.to_string(),
        }
    };

    view! {
        <div class="optimized-image" node_ref=container>
            {move || {
                if !in_view.get() {
                    return view! { <div class="optimized-image__placeholder"></div> }
                        .into_any();
                }
                view! {
                    <img
                        class=move || {
                            if loaded.get() {
                                "optimized-image__img optimized-image__img--loaded"
                            } else {
                                "optimized-image__img"
                            }
                        }
                        src=effective_src()
                        alt=alt.clone()
                        loading="lazy"
                        on:load=move |_| set_loaded.set(true)
                        on:error=move |_| set_errored.set(true)
                    />
                }
                    .into_any()
            }}
        </div>
    }
}
