//! メインアプリケーションコンポーネント

use crate::components::{
    cost_calculator::CostCalculator,
    header::Header,
    load_log::LoadLog,
    target_analysis::TargetAnalysis,
    unit_converter::UnitConverter,
};
use leptos::prelude::*;

/// 表示中のタブ
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Cost,
    Units,
    LoadLog,
    Analysis,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Cost => "コスト計算",
            Tab::Units => "単位換算",
            Tab::LoadLog => "ロード記録",
            Tab::Analysis => "標的解析",
        }
    }
}

const TABS: [Tab; 4] = [Tab::Cost, Tab::Units, Tab::LoadLog, Tab::Analysis];

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(Tab::Cost);

    view! {
        <div class="container">
            <Header />

            <nav class="tab-bar">
                {TABS
                    .iter()
                    .map(|&tab| {
                        view! {
                            <button
                                class=move || {
                                    if active_tab.get() == tab { "tab active" } else { "tab" }
                                }
                                on:click=move |_| set_active_tab.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>

            <main class="tab-content">
                <Show when=move || active_tab.get() == Tab::Cost>
                    <CostCalculator />
                </Show>
                <Show when=move || active_tab.get() == Tab::Units>
                    <UnitConverter />
                </Show>
                <Show when=move || active_tab.get() == Tab::LoadLog>
                    <LoadLog />
                </Show>
                <Show when=move || active_tab.get() == Tab::Analysis>
                    <TargetAnalysis />
                </Show>
            </main>
        </div>
    }
}
