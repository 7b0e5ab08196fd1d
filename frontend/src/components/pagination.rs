use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub on_page: Callback<u32>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let prev = {
        let on_page = props.on_page.clone();
        let page = props.page;
        Callback::from(move |_: MouseEvent| on_page.emit(page - 1))
    };
    let next = {
        let on_page = props.on_page.clone();
        let page = props.page;
        Callback::from(move |_: MouseEvent| on_page.emit(page + 1))
    };

    html! {
        <div class="pagination">
            <p class="pagination-summary">
                {format!("Page {} of {} ({} items)", props.page, props.total_pages, props.total_items)}
            </p>
            <div class="pagination-buttons">
                <button disabled={props.page <= 1} onclick={prev}>{"Prev"}</button>
                {for (1..=props.total_pages).map(|number| {
                    let onclick = {
                        let on_page = props.on_page.clone();
                        Callback::from(move |_: MouseEvent| on_page.emit(number))
                    };
                    let class = if number == props.page { "page-btn active" } else { "page-btn" };
                    html! {
                        <button key={number.to_string()} {class} {onclick}>{number}</button>
                    }
                })}
                <button disabled={props.page >= props.total_pages} onclick={next}>{"Next"}</button>
            </div>
        </div>
    }
}
