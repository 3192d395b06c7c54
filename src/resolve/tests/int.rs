use super::index_of;
use crate::resolve::int_arg;

macro_rules! int_test {
    ($name:ident, args: $args:expr, query: $query:expr, default: $default:expr, expect: $expected:expr) => {
        #[test]
        fn $name() {
            let index = index_of($args);
            assert_eq!(int_arg(&index, $query, $default), $expected);
        }
    };
}

int_test!(empty_args_default_eleven, args: "", query: "-jff", default: 11, expect: 11);
int_test!(empty_args_default_zero, args: "", query: "-jff", default: 0, expect: 0);
int_test!(bare_flag_is_zero, args: "-jff -bar", query: "-jff", default: 11, expect: 0);
int_test!(second_bare_flag_is_zero, args: "-jff -bar", query: "-bar", default: 11, expect: 0);
int_test!(first_value, args: "-jff=11 -bar=12", query: "-jff", default: 0, expect: 11);
int_test!(second_value, args: "-jff=11 -bar=12", query: "-bar", default: 11, expect: 12);
int_test!(nan_is_zero, args: "-jff=NaN -bar=NotANumber", query: "-jff", default: 1, expect: 0);
int_test!(text_is_zero, args: "-jff=NaN -bar=NotANumber", query: "-bar", default: 11, expect: 0);
int_test!(double_dash_value, args: "--jff=verbose --bar=1", query: "-bar", default: 0, expect: 1);
int_test!(negative_value, args: "-jff=-5", query: "-jff", default: 0, expect: -5);
int_test!(empty_value_is_zero, args: "-jff=", query: "-jff", default: 7, expect: 0);
int_test!(first_value_wins, args: "-jff=1 -jff=2", query: "-jff", default: 0, expect: 1);
