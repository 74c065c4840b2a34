//! `rest_service!`: declare a REST client interface.

/// Declare a client interface and its generated client.
///
/// Expands to:
/// - an async trait with one method per declared method, each returning
///   [`ProxyResult`](crate::ProxyResult)
/// - a client struct implementing the trait by dispatching every call
/// - a [`RestContract`](crate::routing::RestContract) impl carrying the
///   interface's static route table
///
/// Route records are repeatable attributes. Declaring zero or several is
/// accepted here and rejected by the route resolver when the method is called.
///
/// Methods take zero or one request argument. Leave out `-> T` for methods
/// that produce no value; the response body is then never read.
///
/// ```rust,ignore
/// rest_service! {
///     #[service(setting = "ServerEndpoint")]
///     pub trait PortOrderService => PortOrderServiceClient {
///         #[route(GET, "/portOrder/{Id}")]
///         fn get_by_id(&self, request: GetByIdRequest) -> GetByIdResponse;
///
///         #[route(PUT, "/portOrder/{Id}/")]
///         fn schedule(&self, request: SchedulePortOrderRequest);
///     }
/// }
/// ```
#[macro_export]
macro_rules! rest_service {
    (
        $(#[doc = $doc:literal])*
        $(#[service($skey:ident = $sval:literal)])*
        $vis:vis trait $Trait:ident => $Client:ident {
            $(
                $(#[doc = $mdoc:literal])*
                $(#[route($verb:ident, $template:literal)])*
                fn $method:ident(&self $(, $arg:ident : $arg_ty:ty)*) $(-> $ret:ty)?;
            )*
        }
    ) => {
        $(#[doc = $doc])*
        #[$crate::async_trait::async_trait]
        $vis trait $Trait: Send + Sync {
            $(
                $(#[doc = $mdoc])*
                async fn $method(&self $(, $arg: $arg_ty)*)
                    -> $crate::ProxyResult<$crate::__rest_return_type!($($ret)?)>;
            )*
        }

        #[doc = concat!("REST client implementing [`", stringify!($Trait), "`].")]
        #[derive(Debug, Clone)]
        $vis struct $Client {
            dispatcher: $crate::proxy::Dispatcher,
        }

        impl $Client {
            $vis fn new(dispatcher: $crate::proxy::Dispatcher) -> Self {
                Self { dispatcher }
            }
        }

        impl $crate::routing::RestContract for $Client {
            fn contract() -> &'static $crate::routing::ServiceContract {
                static CONTRACT: $crate::routing::ServiceContract = $crate::routing::ServiceContract {
                    name: stringify!($Trait),
                    kind: $crate::routing::ContractKind::Interface,
                    routes: &[$($crate::__rest_service_route!($skey = $sval)),*],
                    methods: &[$(
                        $crate::routing::MethodContract {
                            name: stringify!($method),
                            routes: &[$(
                                $crate::routing::MethodRoute::new($crate::__rest_verb!($verb), $template)
                            ),*],
                            returns: $crate::__rest_response_type!($($ret)?),
                            arity: $crate::__rest_count!($($arg)*),
                        }
                    ),*],
                };
                &CONTRACT
            }
        }

        #[$crate::async_trait::async_trait]
        impl $Trait for $Client {
            $(
                async fn $method(&self $(, $arg: $arg_ty)*)
                    -> $crate::ProxyResult<$crate::__rest_return_type!($($ret)?)>
                {
                    let arguments = vec![$($crate::serialization::to_value(&$arg)?),*];
                    let invocation = $crate::proxy::Invocation::new(
                        <Self as $crate::routing::RestContract>::contract(),
                        stringify!($method),
                        arguments,
                    );
                    self.dispatcher.invoke(invocation).await
                }
            )*
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __rest_return_type {
    () => { () };
    ($ret:ty) => { $ret };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __rest_response_type {
    () => { $crate::routing::ResponseType::Unit };
    ($ret:ty) => { $crate::routing::ResponseType::Json(stringify!($ret)) };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __rest_service_route {
    (setting = $key:literal) => { $crate::routing::ServiceRoute::Setting($key) };
    (base_url = $url:literal) => { $crate::routing::ServiceRoute::BaseUrl($url) };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __rest_verb {
    (GET) => { $crate::routing::HttpVerb::Get };
    (POST) => { $crate::routing::HttpVerb::Post };
    (PUT) => { $crate::routing::HttpVerb::Put };
    (DELETE) => { $crate::routing::HttpVerb::Delete };
    (PATCH) => { $crate::routing::HttpVerb::Patch };
    (HEAD) => { $crate::routing::HttpVerb::Head };
    (OPTIONS) => { $crate::routing::HttpVerb::Options };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __rest_count {
    () => { 0usize };
    ($head:ident $($tail:ident)*) => { 1usize + $crate::__rest_count!($($tail)*) };
}
