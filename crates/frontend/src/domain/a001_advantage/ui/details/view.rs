use super::form::AdvantageField;
use super::view_model::{EditAdvantageQuery, EditAdvantageVm};
use crate::shared::query::{current_search, parse_query};
use leptos::prelude::*;
use thaw::Spinner;

/// Edit page for one advantage, addressed as `?id=<advantage id>`
#[component]
pub fn EditAdvantagePage() -> impl IntoView {
    let query: EditAdvantageQuery = parse_query(&current_search());
    let vm = EditAdvantageVm::new(query.advantage_id());
    vm.load();

    let is_loading = vm.is_loading();
    let header_name = vm.header_name();

    view! {
        <div id="a001_advantage--detail" class="page" data-page-category="detail">
            <div class="page__header">
                <span class="page__user">{move || header_name.get()}</span>
            </div>

            <Show
                when=move || !is_loading.get()
                fallback=|| view! {
                    <div class="page__content page__content--loading">
                        <Spinner />
                        <p>"Carregando informações..."</p>
                    </div>
                }
            >
                <AdvantageEditForm vm=vm />
            </Show>
        </div>
    }
}

#[component]
fn AdvantageEditForm(vm: EditAdvantageVm) -> impl IntoView {
    let submit_label = vm.submit_label();
    let preview_src = vm.preview_src();
    let description = vm.field(AdvantageField::Description);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="page__content details-container advantage-details">
            <div class="details-header">
                <h1 class="page__title">"Editar Vantagem"</h1>
                <p class="page__subtitle">"Atualize os dados da vantagem"</p>
            </div>

            <form class="details-form" on:submit=on_submit>
                <TextField vm=vm field=AdvantageField::Title label="Título da vantagem" />

                <div class="form-group">
                    <label for="descricao">"Descrição"</label>
                    <textarea
                        id="descricao"
                        rows="4"
                        required=true
                        prop:value=move || description.get()
                        on:input=move |ev| {
                            vm.update_field(AdvantageField::Description, event_target_value(&ev));
                        }
                    />
                </div>

                <div class="form-row">
                    <TextField
                        vm=vm
                        field=AdvantageField::CoinCost
                        label="Custo em moedas"
                        input_type="number"
                    />
                    <TextField
                        vm=vm
                        field=AdvantageField::Quantity
                        label="Quantidade Disponível (Estoque)"
                        input_type="number"
                        placeholder="Ex: 50"
                    />
                </div>

                <TextField vm=vm field=AdvantageField::PhotoUrl label="URL da imagem" />

                {move || preview_src.get().map(|src| view! {
                    <div class="advantage-details__preview">
                        <img src=src alt="Preview" on:error=move |_| vm.mark_photo_broken() />
                    </div>
                })}

                <div class="details-actions">
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| vm.cancel()
                    >
                        "Cancelar"
                    </button>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || vm.submitting.get()
                    >
                        {move || submit_label.get()}
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Single-line required input bound to one form field
#[component]
fn TextField(
    vm: EditAdvantageVm,
    field: AdvantageField,
    #[prop(into)] label: String,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let input_id = field.name();
    let value = vm.field(field);

    view! {
        <div class="form-group">
            <label for=input_id>{label}</label>
            <input
                type=input_type.unwrap_or_else(|| "text".to_string())
                id=input_id
                placeholder=placeholder.unwrap_or_default()
                required=true
                prop:value=move || value.get()
                on:input=move |ev| vm.update_field(field, event_target_value(&ev))
            />
        </div>
    }
}
