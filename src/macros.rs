// Copyright © 2016–2018 University of Malta

// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU Lesser General Public License
// as published by the Free Software Foundation, either version 3 of
// the License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public
// License and a copy of the GNU General Public License along with
// this program. If not, see <http://www.gnu.org/licenses/>.

// $func is fn(&$Big) -> $Big
macro_rules! arith_unary {
    {
        $Big:ty;
        $func:path;
        $Imp:ident $method:ident
    } => {
        impl $Imp for $Big {
            type Output = $Big;
            #[inline]
            fn $method(self) -> $Big {
                $func(&self)
            }
        }

        impl<'a> $Imp for &'a $Big {
            type Output = $Big;
            #[inline]
            fn $method(self) -> $Big {
                $func(self)
            }
        }
    }
}

// $func is fn(&$Big, &$Big) -> $Big
macro_rules! arith_binary {
    {
        $Big:ty;
        $func:path;
        $Imp:ident $method:ident;
        $ImpAssign:ident $method_assign:ident
    } => {
        // x # y
        impl $Imp<$Big> for $Big {
            type Output = $Big;
            #[inline]
            fn $method(self, rhs: $Big) -> $Big {
                $func(&self, &rhs)
            }
        }

        // x # &y
        impl<'a> $Imp<&'a $Big> for $Big {
            type Output = $Big;
            #[inline]
            fn $method(self, rhs: &'a $Big) -> $Big {
                $func(&self, rhs)
            }
        }

        // &x # y
        impl<'a> $Imp<$Big> for &'a $Big {
            type Output = $Big;
            #[inline]
            fn $method(self, rhs: $Big) -> $Big {
                $func(self, &rhs)
            }
        }

        // &x # &y
        impl<'a, 'b> $Imp<&'a $Big> for &'b $Big {
            type Output = $Big;
            #[inline]
            fn $method(self, rhs: &'a $Big) -> $Big {
                $func(self, rhs)
            }
        }

        // x #= y
        impl $ImpAssign<$Big> for $Big {
            #[inline]
            fn $method_assign(&mut self, rhs: $Big) {
                *self = $func(self, &rhs);
            }
        }

        // x #= &y
        impl<'a> $ImpAssign<&'a $Big> for $Big {
            #[inline]
            fn $method_assign(&mut self, rhs: &'a $Big) {
                *self = $func(self, rhs);
            }
        }
    }
}

macro_rules! sum_prod {
    { $Big:ty, $zero:expr, $one:expr } => {
        impl ::std::iter::Sum for $Big {
            #[inline]
            fn sum<I>(mut iter: I) -> $Big
            where
                I: ::std::iter::Iterator<Item = $Big>,
            {
                match iter.next() {
                    Some(first) => iter.fold(first, Add::add),
                    None => $zero,
                }
            }
        }

        impl<'a> ::std::iter::Sum<&'a $Big> for $Big {
            #[inline]
            fn sum<I>(mut iter: I) -> $Big
            where
                I: ::std::iter::Iterator<Item = &'a $Big>,
            {
                match iter.next() {
                    Some(first) => iter.fold(first.clone(), Add::add),
                    None => $zero,
                }
            }
        }

        impl ::std::iter::Product for $Big {
            #[inline]
            fn product<I>(mut iter: I) -> $Big
            where
                I: ::std::iter::Iterator<Item = $Big>,
            {
                match iter.next() {
                    Some(first) => iter.fold(first, Mul::mul),
                    None => $one,
                }
            }
        }

        impl<'a> ::std::iter::Product<&'a $Big> for $Big {
            #[inline]
            fn product<I>(mut iter: I) -> $Big
            where
                I: ::std::iter::Iterator<Item = &'a $Big>,
            {
                match iter.next() {
                    Some(first) => iter.fold(first.clone(), Mul::mul),
                    None => $one,
                }
            }
        }
    }
}

// $conv is fn($T) -> $Big
macro_rules! from_prim {
    { $Big:ty; $conv:path; $($T:ty)* } => {
        $(
            impl From<$T> for $Big {
                #[inline]
                fn from(val: $T) -> $Big {
                    $conv(::num_bigint::BigInt::from(val))
                }
            }
        )*
    }
}

macro_rules! from_prims {
    { $Big:ty; $conv:path } => {
        from_prim! {
            $Big; $conv;
            i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize
        }
    }
}

// Cross-type comparison through `(numerator, denominator)` pairs.
macro_rules! cmp_via_fractions {
    { $Lhs:ty, $Rhs:ty } => {
        impl PartialEq<$Rhs> for $Lhs {
            #[inline]
            fn eq(&self, other: &$Rhs) -> bool {
                crate::number::cmp_fractions(
                    &self.fraction_parts(false),
                    &other.fraction_parts(false),
                ) == ::std::cmp::Ordering::Equal
            }
        }

        impl PartialOrd<$Rhs> for $Lhs {
            #[inline]
            fn partial_cmp(&self, other: &$Rhs) -> Option<::std::cmp::Ordering> {
                Some(crate::number::cmp_fractions(
                    &self.fraction_parts(false),
                    &other.fraction_parts(false),
                ))
            }
        }
    }
}
