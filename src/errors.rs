//////////////////////////////////////////////////////////////////////
// use error chain so we can use Result<> everywhere
// for error handling

error_chain! {

    foreign_links {
        Fmt(::std::fmt::Error);
        Io(::std::io::Error);
        Cairo(::cairo::Error);
    }

    errors {

        // geometry that has no defined answer, e.g. the angle of a
        // zero-length vector
        Domain(what: String) {
            description("undefined geometry")
            display("domain error: {:}", what)
        }

        // rejected settings (at load time, never clamped)
        Config(what: String) {
            description("invalid configuration")
            display("configuration error: {:}", what)
        }

    }

}
