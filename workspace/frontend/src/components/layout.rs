use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub sidebar: Html,
    pub children: Children,
}

/// Title bar, sidebar with the input widgets, main area with the output.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-base-200">
            <header class="navbar bg-base-100 shadow-sm px-6">
                <h1 class="text-2xl font-bold">
                    <i class="fas fa-heart-pulse text-error mr-2"></i>
                    {"Heart Disease Prediction App"}
                </h1>
            </header>
            <div class="flex flex-col lg:flex-row gap-6 p-6">
                <aside class="lg:w-96 bg-base-100 rounded-box shadow p-4">
                    <h2 class="text-lg font-semibold mb-4">{"User Input Features"}</h2>
                    {props.sidebar.clone()}
                </aside>
                <main class="flex-1 bg-base-100 rounded-box shadow p-6">
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}
