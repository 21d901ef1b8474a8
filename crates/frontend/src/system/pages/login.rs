use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::api;
use crate::system::auth::context::use_session;
use crate::shared::notifications::{use_notifications, Notifier};

const LOGIN_ERROR: &str = "Erro ao fazer login";

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (senha, set_senha) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let session = use_session();
    let notifications = use_notifications();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let request = match api::validate_credentials(&email.get_untracked(), &senha.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                notifications.error(message);
                return;
            }
        };

        set_is_loading.set(true);
        spawn_local(async move {
            match api::login(&request).await {
                Ok(response) => {
                    let message = response
                        .mensagem
                        .clone()
                        .unwrap_or_else(|| "Login realizado com sucesso!".to_string());
                    set_senha.set(String::new());
                    set_is_loading.set(false);
                    // Swaps this page for the dashboard
                    session.login(response.vendedor, response.token);
                    notifications.success(&message);
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    notifications.error(&e.user_message(LOGIN_ERROR));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>"Login do Vendedor"</h2>
                <p class="login-box__subtitle">"Acesse seu dashboard de vendas e comissões"</p>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="seu@email.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="senha">"Senha"</label>
                        <input
                            type="password"
                            id="senha"
                            placeholder="Sua senha"
                            prop:value=move || senha.get()
                            on:input=move |ev| set_senha.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn btn--primary btn--block"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
