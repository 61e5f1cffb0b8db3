// web_app/pages/auth.rs - Sign in / sign up page
//
// Two tabs sharing one submit button. `/login?mode=signup` opens on the
// sign up tab. On success the session is filled in and the user lands on
// the dashboard.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use web_sys::SubmitEvent;

use super::use_api;
use crate::web_app::actions::auth::{self, SignUpError};
use crate::web_app::components::*;
use crate::web_app::forms::{FieldErrors, RegisterForm, SignInForm};
use crate::web_app::routes::{self, AuthMode};
use crate::web_app::state::{use_page_tasks, use_session, with_loading};

/// Sign up inputs, one signal per field
#[derive(Clone, Copy)]
struct RegisterFields {
    user_name: RwSignal<String>,
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    phone: RwSignal<String>,
    role: RwSignal<String>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    confirm_password: RwSignal<String>,
}

impl RegisterFields {
    fn new() -> Self {
        Self {
            user_name: RwSignal::new(String::new()),
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            role: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            confirm_password: RwSignal::new(String::new()),
        }
    }

    fn snapshot(&self) -> RegisterForm {
        RegisterForm {
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            email: self.email.get_untracked(),
            user_name: self.user_name.get_untracked(),
            phone: self.phone.get_untracked(),
            role: self.role.get_untracked(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
        }
    }
}

/// Authentication page component
#[component]
pub fn AuthPage() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let toaster = use_toaster();
    let tasks = use_page_tasks();
    let navigate = use_navigate();
    let query = use_query_map();

    let initial_mode = query.with_untracked(|q| AuthMode::from_query(q.get(routes::MODE_PARAM).as_deref()));
    let mode = RwSignal::new(initial_mode);

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let register = RegisterFields::new();
    let errors = RwSignal::new(FieldErrors::default());
    let submitting = RwSignal::new(false);

    let field_error = move |field: &'static str| Signal::derive(move || errors.with(|e| e.get(field)));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let api = api.clone();
        let toaster = toaster.clone();
        let navigate = navigate.clone();

        match mode.get_untracked() {
            AuthMode::SignIn => {
                let form = SignInForm {
                    email: email.get_untracked(),
                    password: password.get_untracked(),
                };
                let request = with_loading(submitting, async move { auth::sign_in(&api, &form).await });
                tasks.spawn(async move {
                    match request.await {
                        Ok(done) => {
                            session.sign_in(done.value);
                            toaster.show(done.notice);
                            navigate(routes::HOME, Default::default());
                        }
                        Err(notice) => toaster.show(notice),
                    }
                });
            }
            AuthMode::SignUp => {
                let form = register.snapshot();
                let request = with_loading(submitting, async move { auth::sign_up(&api, &form).await });
                tasks.spawn(async move {
                    match request.await {
                        Ok(done) => {
                            errors.try_set(FieldErrors::default());
                            session.sign_in(done.value);
                            toaster.show(done.notice);
                            navigate(routes::HOME, Default::default());
                        }
                        Err(SignUpError::Fields(field_errors)) => {
                            errors.try_set(field_errors);
                        }
                        Err(SignUpError::Request(notice)) => toaster.show(notice),
                    }
                });
            }
        }
    };

    let busy_label = Signal::derive(move || match mode.get() {
        AuthMode::SignIn => "Signing in...",
        AuthMode::SignUp => "Creating...",
    });

    let tab_class = move |tab: AuthMode| {
        move || {
            if mode.get() == tab {
                "flex-1 py-2 text-center font-medium border-b-2 border-purple-600 text-purple-700"
            } else {
                "flex-1 py-2 text-center font-medium border-b-2 border-gray-200 text-gray-500 hover:text-gray-700"
            }
        }
    };
    let select_tab = move |tab: AuthMode| {
        move |_: web_sys::MouseEvent| {
            mode.set(tab);
            errors.set(FieldErrors::default());
        }
    };

    view! {
        <div class="flex items-center justify-center min-h-screen bg-gradient-to-br from-purple-50 to-white p-4">
            <div class="w-full max-w-md bg-white rounded-lg shadow-lg p-8">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold text-purple-700">"WishShare"</h1>
                    <p class="text-gray-600">"Create and share wishlists with friends"</p>
                </div>

                <div class="flex mb-6">
                    <button type="button" class=tab_class(AuthMode::SignIn) on:click=select_tab(AuthMode::SignIn)>
                        {AuthMode::SignIn.label()}
                    </button>
                    <button type="button" class=tab_class(AuthMode::SignUp) on:click=select_tab(AuthMode::SignUp)>
                        {AuthMode::SignUp.label()}
                    </button>
                </div>

                <form class="space-y-4" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::SignUp>
                        <FormField label="Username" error=field_error("userName")>
                            <TextInput value=register.user_name name="userName" placeholder="johndoe" />
                        </FormField>
                        <div class="grid grid-cols-2 gap-4">
                            <FormField label="First Name" error=field_error("firstName")>
                                <TextInput value=register.first_name name="firstName" placeholder="John" />
                            </FormField>
                            <FormField label="Last Name" error=field_error("lastName")>
                                <TextInput value=register.last_name name="lastName" placeholder="Doe" />
                            </FormField>
                        </div>
                        <FormField label="Phone" error=field_error("phone")>
                            <TextInput value=register.phone name="phone" input_type="tel" placeholder="+1 (555) 123-4567" />
                        </FormField>
                        <FormField label="Role" error=field_error("role")>
                            <TextInput value=register.role name="role" placeholder="Family member" />
                        </FormField>
                    </Show>

                    <Show
                        when=move || mode.get() == AuthMode::SignUp
                        fallback=move || view! {
                            <FormField label="Email">
                                <TextInput value=email name="email" input_type="email" placeholder="john@example.com" />
                            </FormField>
                            <FormField label="Password">
                                <TextInput value=password name="password" input_type="password" placeholder="••••••••" />
                            </FormField>
                        }
                    >
                        <FormField label="Email" error=field_error("email")>
                            <TextInput value=register.email name="email" input_type="email" placeholder="john@example.com" />
                        </FormField>
                        <FormField label="Password" error=field_error("password")>
                            <TextInput value=register.password name="password" input_type="password" placeholder="••••••••" />
                        </FormField>
                        <FormField label="Confirm Password" error=field_error("confirmPassword")>
                            <TextInput
                                value=register.confirm_password
                                name="confirmPassword"
                                input_type="password"
                                placeholder="••••••••"
                            />
                        </FormField>
                    </Show>

                    <Button
                        button_type="submit"
                        busy=submitting
                        busy_label=busy_label
                        class="w-full"
                    >
                        {move || if mode.get() == AuthMode::SignIn { "Sign In" } else { "Create Account" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}
